use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tn_core::{Article, Clock, NewsSource};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::{CacheConfig, RefreshOutcome};

#[derive(Default)]
struct CacheState {
    articles: HashMap<String, Article>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl CacheState {
    fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        if self.articles.is_empty() {
            return true;
        }
        match self.last_refreshed {
            // A clock stepping backwards counts as no time elapsed.
            Some(at) => (now - at).to_std().unwrap_or_default() > ttl,
            None => true,
        }
    }
}

/// In-memory article cache keyed by article id.
///
/// Every refresh replaces the whole map with whatever the source returned;
/// nothing is merged from the previous cycle, so an id survives a refresh
/// only if the source still serves the same title and url.
pub struct ArticleCache {
    source: Arc<dyn NewsSource>,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
    state: RwLock<CacheState>,
    refresh: Mutex<()>,
}

impl ArticleCache {
    pub fn new(source: Arc<dyn NewsSource>, clock: Arc<dyn Clock>, config: CacheConfig) -> Self {
        Self {
            source,
            clock,
            config,
            state: RwLock::new(CacheState::default()),
            refresh: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Refetches from the source when the cache is empty or older than the
    /// configured ttl, otherwise leaves it untouched.
    ///
    /// Only one refresh runs at a time; callers arriving while it is in
    /// flight wait for it and then reuse its result.
    pub async fn ensure_fresh(&self) -> RefreshOutcome {
        if !self.state.read().await.is_stale(self.clock.now(), self.config.ttl) {
            debug!("Using cached news data");
            return RefreshOutcome::Reused;
        }

        let _guard = self.refresh.lock().await;
        if !self.state.read().await.is_stale(self.clock.now(), self.config.ttl) {
            debug!("Cache refreshed by a concurrent request");
            return RefreshOutcome::Reused;
        }

        info!("🔄 Refreshing news cache from {}...", self.source.name());
        let articles: HashMap<String, Article> = self
            .source
            .fetch_articles()
            .await
            .into_iter()
            .map(Article::from_fetched)
            .map(|article| (article.id.clone(), article))
            .collect();
        let count = articles.len();

        let mut state = self.state.write().await;
        state.articles = articles;
        state.last_refreshed = Some(self.clock.now());
        info!("✨ News cache holds {} articles", count);

        RefreshOutcome::Refreshed { count }
    }

    pub async fn get(&self, id: &str) -> Option<Article> {
        self.state.read().await.articles.get(id).cloned()
    }

    /// All cached articles ordered by title.
    pub async fn articles_sorted(&self) -> Vec<Article> {
        let mut articles: Vec<Article> = self.state.read().await.articles.values().cloned().collect();
        articles.sort_by(|a, b| a.title.cmp(&b.title));
        articles
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.articles.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.articles.is_empty()
    }

    pub async fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_refreshed
    }
}

impl fmt::Debug for ArticleCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleCache")
            .field("source", &self.source.name())
            .field("ttl", &self.config.ttl)
            .finish()
    }
}

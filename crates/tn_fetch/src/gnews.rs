use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tn_core::{categorize_news, Error, FetchedArticle, NewsSource, Result, SourceRef};
use tracing::{debug, error, info, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// GNews does not tag articles, every headline gets this label.
pub const DEFAULT_CATEGORY: &str = "technology";

#[derive(Debug, Clone)]
pub struct GNewsConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub topic: String,
    pub lang: String,
    pub max: u32,
}

impl Default for GNewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            topic: "technology".to_string(),
            lang: "en".to_string(),
            max: 20,
        }
    }
}

impl GNewsConfig {
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct TopHeadlines {
    #[serde(default)]
    articles: Vec<GNewsItem>,
}

#[derive(Deserialize)]
struct GNewsItem {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    content: Option<String>,
    source: Option<GNewsSourceRef>,
    image: Option<String>,
}

#[derive(Deserialize)]
struct GNewsSourceRef {
    name: Option<String>,
}

impl GNewsItem {
    fn into_fetched(self, keyword_categories: bool) -> FetchedArticle {
        let title = self.title.unwrap_or_else(|| "No title".to_string());
        let description = self.description.unwrap_or_default();
        let content = self
            .content
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| description.clone());
        let category = if keyword_categories {
            categorize_news(&title, &content).to_string()
        } else {
            DEFAULT_CATEGORY.to_string()
        };

        FetchedArticle {
            title,
            url: self.url.unwrap_or_else(|| "#".to_string()),
            description,
            content,
            source: SourceRef {
                name: self
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "Unknown Source".to_string()),
            },
            category,
            image: self.image,
        }
    }
}

/// Top technology headlines from gnews.io.
pub struct GNewsSource {
    client: Arc<Client>,
    config: GNewsConfig,
    keyword_categories: bool,
}

impl GNewsSource {
    pub fn new(config: GNewsConfig) -> Self {
        Self {
            client: Arc::new(Client::new()),
            config,
            keyword_categories: false,
        }
    }

    /// Label articles with keyword buckets (`ai_news`, `gaming_news`, ...)
    /// instead of the fixed `technology` category.
    pub fn with_keyword_categories(mut self, enabled: bool) -> Self {
        self.keyword_categories = enabled;
        self
    }

    fn headlines_url(&self, api_key: &str) -> Result<Url> {
        let endpoint = format!("{}/top-headlines", self.config.base_url.trim_end_matches('/'));
        let max = self.config.max.to_string();
        Url::parse_with_params(
            &endpoint,
            &[
                ("topic", self.config.topic.as_str()),
                ("lang", self.config.lang.as_str()),
                ("max", max.as_str()),
                ("token", api_key),
            ],
        )
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", endpoint, e)))
    }

    /// Fetches headlines, surfacing every failure to the caller.
    pub async fn try_fetch_articles(&self) -> Result<Vec<FetchedArticle>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("GNEWS_API_KEY is not set".to_string()))?;

        let url = self.headlines_url(api_key)?;
        debug!("Requesting top headlines from {}", self.config.base_url);

        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<TopHeadlines>()
            .await?;

        Ok(response
            .articles
            .into_iter()
            .map(|item| item.into_fetched(self.keyword_categories))
            .collect())
    }
}

impl fmt::Debug for GNewsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GNewsSource")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.config.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.config.base_url)
            .field("keyword_categories", &self.keyword_categories)
            .finish()
    }
}

#[async_trait]
impl NewsSource for GNewsSource {
    fn name(&self) -> &str {
        "GNews"
    }

    async fn fetch_articles(&self) -> Vec<FetchedArticle> {
        match self.try_fetch_articles().await {
            Ok(articles) => {
                info!("📰 Fetched {} articles from {}", articles.len(), self.name());
                articles
            }
            Err(Error::Config(msg)) => {
                warn!("⚠️ {}, no news will be fetched", msg);
                Vec::new()
            }
            Err(e) => {
                error!("🔴 Error while fetching news: {}", e);
                Vec::new()
            }
        }
    }
}

use std::time::Duration;

pub mod memory;

pub use memory::ArticleCache;

/// How long fetched articles stay fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_CACHE_TTL }
    }
}

impl CacheConfig {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// What a call to [`ArticleCache::ensure_fresh`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Reused,
    Refreshed { count: usize },
}

pub mod prelude {
    pub use super::{ArticleCache, CacheConfig, RefreshOutcome, DEFAULT_CACHE_TTL};
}

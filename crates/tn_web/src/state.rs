use std::sync::Arc;
use tn_cache::ArticleCache;
use tn_inference::Summarizer;

pub struct AppState {
    pub cache: Arc<ArticleCache>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(cache: Arc<ArticleCache>, summarizer: Arc<Summarizer>) -> Self {
        Self { cache, summarizer }
    }
}

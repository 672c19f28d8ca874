use async_trait::async_trait;
use crate::types::FetchedArticle;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Human readable name of the upstream feed
    fn name(&self) -> &str;

    /// Fetch the current headlines.
    ///
    /// Never fails: implementations log the problem and return an empty
    /// list when the upstream is unreachable or misconfigured.
    async fn fetch_articles(&self) -> Vec<FetchedArticle>;
}

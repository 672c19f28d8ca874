use async_trait::async_trait;
use std::fmt;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Name of the backing model, for logs
    fn name(&self) -> &str;

    /// Run a single chat turn: a system instruction followed by user text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

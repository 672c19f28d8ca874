use std::fmt;
use tn_core::{InferenceModel, Result};

const SUMMARY_WORDS: usize = 60;

/// Offline stand-in that echoes the opening words of the text.
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        let words: Vec<&str> = user.split_whitespace().take(SUMMARY_WORDS).collect();
        tracing::debug!("Dummy summary of {} words", words.len());
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::new();

        let text = "Apple just launched a new iPhone.   It has more AI.";
        let summary = model.complete("ignored", text).await.unwrap();
        assert_eq!(summary, "Apple just launched a new iPhone. It has more AI.");

        let long = "word ".repeat(200);
        let summary = model.complete("ignored", &long).await.unwrap();
        assert_eq!(summary.split_whitespace().count(), SUMMARY_WORDS);
    }
}

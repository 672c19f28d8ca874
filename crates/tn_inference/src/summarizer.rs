use std::fmt;
use std::sync::Arc;
use tn_core::InferenceModel;
use tracing::{debug, error};

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes tech news in 50–100 words.";

/// Texts shorter than this (in characters, after trimming) are not sent.
pub const MIN_CONTENT_CHARS: usize = 20;

pub const NOT_ENOUGH_CONTENT: &str = "Not enough content to summarize.";
pub const FAILED_HTTP: &str = "Failed to summarize article (HTTP error).";
pub const FAILED: &str = "Failed to summarize article.";

/// Turns article bodies into short summaries, always yielding displayable text.
///
/// Nothing is cached: every call with enough content goes to the model.
pub struct Summarizer {
    model: Arc<dyn InferenceModel>,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model.name())
            .finish()
    }
}

impl Summarizer {
    pub fn new(model: Arc<dyn InferenceModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn summarize(&self, text: Option<&str>) -> String {
        let text = match text {
            Some(text) if text.trim().chars().count() >= MIN_CONTENT_CHARS => text,
            _ => return NOT_ENOUGH_CONTENT.to_string(),
        };

        debug!("🤖 Summarizing {} chars with {}", text.len(), self.model.name());
        match self.model.complete(SYSTEM_PROMPT, text).await {
            Ok(summary) => summary.trim().to_string(),
            Err(e) if e.is_http_status() => {
                error!("[HTTP ERROR] {}", e);
                FAILED_HTTP.to_string()
            }
            Err(e) => {
                error!("[ERROR] {}", e);
                FAILED.to_string()
            }
        }
    }
}

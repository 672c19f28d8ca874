pub mod models;
pub mod summarizer;

pub const DEFAULT_MODEL_NAME: &str = "mistralai/mistral-7b-instruct:free";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Which backend to build: `openrouter` or `dummy`
    pub provider: String,
    pub api_key: Option<String>,
    pub model_name: String,
    pub base_url: String,
    /// Sent as `HTTP-Referer`, OpenRouter requires it
    pub referer: String,
    /// Sent as `X-Title`
    pub app_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: "openrouter".to_string(),
            api_key: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: "http://localhost".to_string(),
            app_title: "Tech News Summarizer App".to_string(),
        }
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::summarizer::Summarizer;
    pub use tn_core::{InferenceModel, Result, Error};
}

pub use models::create_model;
pub use summarizer::Summarizer;

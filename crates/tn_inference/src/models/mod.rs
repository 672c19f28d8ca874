use std::sync::Arc;
use tn_core::{Error, InferenceModel, Result};

use crate::Config;

pub mod dummy;
pub mod openrouter;

pub use dummy::DummyModel;
pub use openrouter::OpenRouterModel;

/// Builds the model named by `config.provider`.
pub fn create_model(config: Option<Config>) -> Result<Arc<dyn InferenceModel>> {
    let config = config.unwrap_or_default();
    match config.provider.to_lowercase().as_str() {
        "openrouter" => {
            if config.api_key.is_none() {
                tracing::warn!("⚠️ OPENROUTER_API_KEY is not set, summarization requests will be rejected upstream");
            }
            Ok(Arc::new(OpenRouterModel::new(config)))
        }
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Config(format!(
            "Unknown inference provider: {} (expected openrouter or dummy)",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_by_provider() {
        let model = create_model(None).unwrap();
        assert_eq!(model.name(), crate::DEFAULT_MODEL_NAME);

        let dummy = create_model(Some(Config {
            provider: "Dummy".to_string(),
            ..Config::default()
        }))
        .unwrap();
        assert_eq!(dummy.name(), "dummy");
    }

    #[test]
    fn test_create_model_rejects_unknown_provider() {
        let result = create_model(Some(Config {
            provider: "ollama".to_string(),
            ..Config::default()
        }));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

use anyhow::{anyhow, Result};
use std::fmt;
use std::time::Duration;
use tn_inference::DEFAULT_MODEL_NAME;

use crate::duration::HumanDuration;

pub const GNEWS_API_KEY: &str = "GNEWS_API_KEY";
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
pub const OPENROUTER_MODEL: &str = "OPENROUTER_MODEL";
pub const CACHE_TTL: &str = "TN_CACHE_TTL";

/// Settings read from the environment (and `.env`, when present).
#[derive(Clone)]
pub struct AppConfig {
    pub gnews_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
    pub openrouter_model: String,
    pub cache_ttl: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let cache_ttl = get(CACHE_TTL)
            .map(|raw| {
                raw.parse::<HumanDuration>()
                    .map(|d| d.0)
                    .map_err(|e| anyhow!("{}={:?}: {}", CACHE_TTL, raw, e))
            })
            .transpose()?;

        Ok(Self {
            gnews_api_key: get(GNEWS_API_KEY),
            openrouter_api_key: get(OPENROUTER_API_KEY),
            openrouter_model: get(OPENROUTER_MODEL).unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
            cache_ttl,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("gnews_api_key", &self.gnews_api_key.as_deref().map(|_| "<redacted>"))
            .field("openrouter_api_key", &self.openrouter_api_key.as_deref().map(|_| "<redacted>"))
            .field("openrouter_model", &self.openrouter_model)
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert!(config.gnews_api_key.is_none());
        assert!(config.openrouter_api_key.is_none());
        assert_eq!(config.openrouter_model, DEFAULT_MODEL_NAME);
        assert!(config.cache_ttl.is_none());
    }

    #[test]
    fn test_reads_values() {
        let config = config_from(&[
            (GNEWS_API_KEY, "g-key"),
            (OPENROUTER_API_KEY, "o-key"),
            (OPENROUTER_MODEL, "openai/gpt-4o-mini"),
            (CACHE_TTL, "30m"),
        ])
        .unwrap();
        assert_eq!(config.gnews_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.openrouter_api_key.as_deref(), Some("o-key"));
        assert_eq!(config.openrouter_model, "openai/gpt-4o-mini");
        assert_eq!(config.cache_ttl, Some(Duration::from_secs(1800)));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[(GNEWS_API_KEY, "  "), (OPENROUTER_MODEL, "")]).unwrap();
        assert!(config.gnews_api_key.is_none());
        assert_eq!(config.openrouter_model, DEFAULT_MODEL_NAME);
    }

    #[test]
    fn test_invalid_ttl() {
        assert!(config_from(&[(CACHE_TTL, "soon")]).is_err());
        let err = config_from(&[(CACHE_TTL, "300000000000000d")]).unwrap_err();
        assert!(err.to_string().contains("duration too large"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = config_from(&[(GNEWS_API_KEY, "secret-g")]).unwrap();
        assert!(!format!("{:?}", config).contains("secret-g"));
    }
}

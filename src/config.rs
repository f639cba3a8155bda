//! Recognizer endpoint configuration.
//!
//! Settings resolve in three layers: built-in defaults, then an optional
//! YAML file passed with `--config`, then any CLI flag or environment
//! variable override. The resolved config is built once at startup and
//! shared read-only for the rest of the run.

use serde::Deserialize;
use std::error::Error;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Default OpenAI-compatible endpoint, a locally served model.
pub const DEFAULT_API_BASE: &str = "http://localhost:1234/v1";
/// Default model name on the local endpoint.
pub const DEFAULT_MODEL: &str = "qwen2.5-7b-instruct";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_max_tokens() -> u32 {
    2048
}

/// Connection settings for the entity recognition endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerConfig {
    /// Base URL of the OpenAI-compatible API, without the request path.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Model name to request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token; local endpoints usually run without one.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Sampling temperature. Zero keeps extraction repeatable.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Reply token budget for the entity list.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            model: default_model(),
            api_key: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl RecognizerConfig {
    /// Load configuration, starting from defaults or the given YAML file,
    /// then applying any overrides.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a YAML config file
    /// * `api_base` - Override for the endpoint base URL
    /// * `model` - Override for the model name
    /// * `api_key` - Override for the bearer token
    #[instrument(level = "info", skip_all, fields(path = ?path))]
    pub async fn load(
        path: Option<&str>,
        api_base: Option<String>,
        model: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, Box<dyn Error>> {
        let mut config = match path {
            Some(p) => {
                let raw = fs::read_to_string(p).await?;
                let parsed: RecognizerConfig = serde_yaml::from_str(&raw)?;
                info!(path = %p, "Loaded recognizer configuration");
                parsed
            }
            None => {
                debug!("No config file given; using defaults");
                Self::default()
            }
        };

        if let Some(base) = api_base {
            config.api_base_url = base;
        }
        if let Some(model) = model {
            config.model = model;
        }
        if api_key.is_some() {
            config.api_key = api_key;
        }

        info!(api_base_url = %config.api_base_url, model = %config.model, "Recognizer configured");
        Ok(config)
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecognizerConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
        assert_eq!(config.temperature, 0.0);
    }

    #[test]
    fn test_yaml_parse_with_partial_fields() {
        let yaml = "api_base_url: https://openrouter.ai/api/v1\nmodel: openai/gpt-4o-mini\n";
        let config: RecognizerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api_base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.model, "openai/gpt-4o-mini");
        // unspecified fields fall back to defaults
        assert_eq!(config.max_tokens, 2048);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let config = RecognizerConfig {
            api_base_url: "http://localhost:1234/v1/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.completions_url(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_load_applies_overrides() {
        let config = RecognizerConfig::load(
            None,
            Some("http://127.0.0.1:8080/v1".to_string()),
            Some("mistral-7b".to_string()),
            Some("secret".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080/v1");
        assert_eq!(config.model, "mistral-7b");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_an_error() {
        let result = RecognizerConfig::load(Some("/nonexistent/config.yaml"), None, None, None).await;
        assert!(result.is_err());
    }
}

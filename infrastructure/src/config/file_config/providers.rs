//! Provider configuration from TOML (`[providers]` section)

use crate::openai::OpenAiSettings;
use crate::providers::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Base URL for the API (can be overridden for proxies or local servers).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Retries for transient failures (0 disables retrying).
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds.
    pub retry_backoff_ms: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_seconds: 60,
            max_retries: 2,
            retry_backoff_ms: 500,
        }
    }
}

impl FileOpenAiConfig {
    /// The configured key, or the value of `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn to_settings(&self) -> OpenAiSettings {
        OpenAiSettings {
            base_url: self.base_url.clone(),
            api_key: self.resolve_api_key(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI-compatible API settings.
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins_over_env() {
        let config = FileOpenAiConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "DELEGATOR_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("sk-direct".to_string()));
    }

    #[test]
    fn test_missing_env_key_is_none() {
        let config = FileOpenAiConfig {
            api_key_env: "DELEGATOR_TEST_DEFINITELY_UNSET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_settings_and_policy() {
        let config = FileOpenAiConfig {
            api_key: Some("k".to_string()),
            timeout_seconds: 5,
            max_retries: 0,
            retry_backoff_ms: 10,
            ..Default::default()
        };
        let settings = config.to_settings();
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.api_key.as_deref(), Some("k"));
        assert_eq!(config.retry_policy().max_retries, 0);
        assert_eq!(
            config.retry_policy().initial_backoff,
            Duration::from_millis(10)
        );
    }
}

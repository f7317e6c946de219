//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod delegation;
mod logging;
mod oracle;
mod output;
mod providers;
mod repl;

pub use delegation::FileDelegationConfig;
pub use logging::FileLoggingConfig;
pub use oracle::FileOracleConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use crate::catalog::build_catalog;
use delegator_domain::{CatalogError, ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model used for both selection and generation
    pub oracle: FileOracleConfig,
    /// Provider connection settings
    pub providers: FileProvidersConfig,
    /// Default candidate restriction
    pub delegation: FileDelegationConfig,
    /// Extra experts or persona overrides, keyed by expert key
    ///
    /// Figment merges tables into sorted maps, so file order is not kept:
    /// new experts reach the catalog in key order.
    pub experts: BTreeMap<String, String>,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// The configured model, or the default when unset or blank.
    pub fn parse_model(&self) -> Model {
        self.oracle.parse_model().0
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Blank model name
    /// 2. Blank personas in `[experts]`
    /// 3. `[delegation] candidates` keys missing from the catalog
    /// 4. No API key reachable (warning only, local servers may not need one)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.oracle.parse_model().1);

        for (key, persona) in &self.experts {
            if persona.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPersona { key: key.clone() },
                    format!("experts.{}: persona cannot be empty", key),
                ));
            }
        }

        match build_catalog(self) {
            Ok(catalog) => {
                for key in self.delegation.candidates.iter().flatten() {
                    if !catalog.contains(key) {
                        issues.push(ConfigIssue::error(
                            ConfigIssueCode::UnknownCandidate { key: key.clone() },
                            format!(
                                "delegation.candidates: '{}' is not a known expert (see --list-experts)",
                                key
                            ),
                        ));
                    }
                }
            }
            // Already reported above
            Err(CatalogError::EmptyPersona(_)) => {}
            Err(e) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidExperts {
                    reason: e.to_string(),
                },
                format!("experts: {}", e),
            )),
        }

        let openai = &self.providers.openai;
        if openai.resolve_api_key().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey {
                    env_var: openai.api_key_env.clone(),
                },
                format!(
                    "No API key found: set {} or providers.openai.api_key",
                    openai.api_key_env
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delegator_domain::{OutputFormat, Severity};

    fn with_key(mut config: FileConfig) -> FileConfig {
        config.providers.openai.api_key = Some("sk-test".to_string());
        config
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[oracle]
model = "gpt-4o-mini"

[providers.openai]
base_url = "http://localhost:8080"
timeout_seconds = 30
max_retries = 0

[delegation]
candidates = ["aiExpert", "rustExpert"]

[experts]
rustExpert = "You are a Rust expert."

[logging]
conversation_log = "/tmp/delegator.jsonl"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/expert-delegator/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.parse_model(), Model::Gpt4oMini);
        assert_eq!(config.providers.openai.base_url, "http://localhost:8080");
        assert_eq!(config.providers.openai.timeout_seconds, 30);
        assert_eq!(config.providers.openai.max_retries, 0);
        // Unset provider fields keep their defaults
        assert_eq!(config.providers.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.providers.openai.retry_backoff_ms, 500);
        assert_eq!(
            config.delegation.candidates,
            Some(vec!["aiExpert".to_string(), "rustExpert".to_string()])
        );
        assert_eq!(
            config.experts.get("rustExpert").map(String::as_str),
            Some("You are a Rust expert.")
        );
        assert!(config.logging.conversation_log.is_some());
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[oracle]\nmodel = \"o3-mini\"\n").unwrap();
        assert_eq!(config.parse_model(), Model::O3Mini);
        assert!(config.delegation.candidates.is_none());
        assert!(config.experts.is_empty());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = with_key(FileConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_missing_api_key_as_warning() {
        let mut config = FileConfig::default();
        config.providers.openai.api_key_env = "DELEGATOR_TEST_NO_SUCH_KEY".to_string();

        let issues = config.validate();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_unknown_candidate() {
        let mut config = with_key(FileConfig::default());
        config.delegation.candidates =
            Some(vec!["aiExpert".to_string(), "rustExpert".to_string()]);

        let issues = config.validate();

        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::UnknownCandidate {
                key: "rustExpert".to_string()
            }
        );
    }

    #[test]
    fn test_validate_candidate_added_through_experts() {
        let mut config = with_key(FileConfig::default());
        config
            .experts
            .insert("rustExpert".to_string(), "You are a Rust expert.".to_string());
        config.delegation.candidates = Some(vec!["rustExpert".to_string()]);

        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_blank_persona() {
        let mut config = with_key(FileConfig::default());
        config.experts.insert("aiExpert".to_string(), "   ".to_string());

        let issues = config.validate();

        assert!(ConfigIssue::has_errors(&issues));
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyPersona {
                key: "aiExpert".to_string()
            }
        );
    }
}

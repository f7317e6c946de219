//! Oracle model configuration from TOML (`[oracle]` section)

use delegator_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Which model the delegation runs on
///
/// # Example
///
/// ```toml
/// [oracle]
/// model = "gpt-4o-mini"
/// ```
///
/// `OPENAI_MODEL` in the environment overrides this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOracleConfig {
    pub model: Option<String>,
}

impl FileOracleConfig {
    /// Parse the model name, reporting a blank one as an issue.
    ///
    /// Falls back to [`Model::default`] when unset or blank.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        match self.model.as_deref() {
            None => (Model::default(), Vec::new()),
            Some(s) if s.trim().is_empty() => (
                Model::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "oracle.model".to_string(),
                    },
                    "oracle.model: model name cannot be empty",
                )],
            ),
            Some(s) => {
                let Ok(model) = s.trim().parse();
                (model, Vec::new())
            }
        }
    }
}

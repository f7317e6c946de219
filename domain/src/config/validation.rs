//! Structured configuration issues.
//!
//! Config loading never fails on a questionable value by itself. Instead it
//! reports [`ConfigIssue`]s and lets the binary decide: errors abort startup,
//! warnings are printed and ignored.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name field is present but blank.
    EmptyModelName { field: String },
    /// An `[experts]` entry has a blank persona.
    EmptyPersona { key: String },
    /// The `[experts]` table cannot be merged into the catalog.
    InvalidExperts { reason: String },
    /// `[delegation] candidates` names a key that is not in the catalog.
    UnknownCandidate { key: String },
    /// No API key was configured directly or through the environment.
    MissingApiKey { env_var: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Returns true if any of the issues is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_returns_true_for_errors() {
        let issues = vec![
            ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey {
                    env_var: "OPENAI_API_KEY".to_string(),
                },
                "missing",
            ),
            ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "oracle.model".to_string(),
                },
                "empty",
            ),
        ];
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::warning(
            ConfigIssueCode::UnknownCandidate {
                key: "x".to_string(),
            },
            "unknown",
        )];
        assert!(!ConfigIssue::has_errors(&issues));
        assert!(!ConfigIssue::has_errors(&[]));
    }
}

//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for delegation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Chosen expert header plus the answer (default)
    #[default]
    Text,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

//! Results of the selection and delegation steps

use serde::{Deserialize, Serialize};

/// How the selection reply was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// The oracle named one of the candidates exactly.
    Matched,
    /// The oracle's reply was not a candidate; the first candidate was used.
    Fallback { returned: String },
}

/// The key chosen by the selector and how it was arrived at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertSelection {
    pub key: String,
    pub outcome: SelectionOutcome,
}

impl ExpertSelection {
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, SelectionOutcome::Fallback { .. })
    }
}

/// Output of one delegation
///
/// `chosen_key` is always a member of the candidate set the delegation ran
/// with. `answer` is the trimmed oracle reply and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationResult {
    pub chosen_key: String,
    pub answer: String,
    pub selection: SelectionOutcome,
}

impl DelegationResult {
    pub fn new(selection: ExpertSelection, answer: impl Into<String>) -> Self {
        Self {
            chosen_key: selection.key,
            answer: answer.into(),
            selection: selection.outcome,
        }
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self.selection, SelectionOutcome::Fallback { .. })
    }

    /// True when the oracle produced no visible text.
    pub fn is_empty_answer(&self) -> bool {
        self.answer.trim().is_empty()
    }
}

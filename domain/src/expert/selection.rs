//! Validation of the oracle's selection reply

use super::candidates::CandidateSet;
use crate::delegation::{ExpertSelection, SelectionOutcome};

/// Resolve a raw oracle reply to a candidate key.
///
/// The trimmed reply must equal a candidate exactly (case-sensitive, no
/// partial or fuzzy matching). Anything else resolves to the first
/// candidate, so the returned key is always a member of `candidates`.
pub fn resolve_selection(raw: &str, candidates: &CandidateSet) -> ExpertSelection {
    let reply = raw.trim();
    if candidates.contains(reply) {
        return ExpertSelection {
            key: reply.to_string(),
            outcome: SelectionOutcome::Matched,
        };
    }

    ExpertSelection {
        key: candidates.first().to_string(),
        outcome: SelectionOutcome::Fallback {
            returned: reply.to_string(),
        },
    }
}

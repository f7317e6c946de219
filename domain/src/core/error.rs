//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Candidate set is empty")]
    EmptyCandidateSet,

    #[error("Candidate '{0}' is not in the expert catalog")]
    UnknownCandidate(String),
}

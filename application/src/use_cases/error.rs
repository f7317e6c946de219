//! Errors surfaced by the delegation use cases

use crate::ports::oracle_gateway::GatewayError;
use delegator_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during delegation
///
/// `InvalidCandidateSet` and `UnknownExpert` mean the caller broke a
/// precondition and no oracle call was made. `OracleUnavailable` carries the
/// collaborator's failure unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelegationError {
    #[error("Invalid candidate set: {0}")]
    InvalidCandidateSet(#[from] DomainError),

    #[error("No expert found for key: {0}")]
    UnknownExpert(String),

    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(#[from] GatewayError),
}

impl DelegationError {
    /// True for failures that indicate a bug in the caller rather than a
    /// problem with the oracle.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, DelegationError::OracleUnavailable(_))
    }
}

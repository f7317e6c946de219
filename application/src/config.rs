//! Application-level configuration.
//!
//! Process-wide, read-only settings handed to the use cases at construction
//! time. Timeouts and retries are not configured here: they belong to the
//! oracle adapter.

use delegator_domain::Model;

/// Delegation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelegationConfig {
    /// Model used for both the selection and the generation call.
    pub model: Model,
}

impl DelegationConfig {
    pub fn new(model: Model) -> Self {
        Self { model }
    }
}

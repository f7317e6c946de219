//! Progress notification port
//!
//! Lets the host show what a delegation is doing while the two oracle calls
//! are in flight.

use delegator_domain::ExpertSelection;

/// Callback for progress updates during a delegation
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default so adapters only override what they display.
pub trait DelegationProgress: Send + Sync {
    /// Called before the selection request is sent.
    fn on_selection_start(&self, _candidates: usize) {}

    /// Called once the selection reply has been resolved to a key.
    fn on_expert_selected(&self, _selection: &ExpertSelection) {}

    /// Called before the generation request is sent.
    fn on_answer_start(&self, _expert_key: &str) {}

    /// Called after the generation reply arrived.
    fn on_answer_complete(&self, _expert_key: &str) {}

    /// Called when either step failed.
    fn on_failure(&self, _message: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DelegationProgress for NoProgress {}

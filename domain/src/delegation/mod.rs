//! Delegation value objects.

mod value_objects;

pub use value_objects::{DelegationResult, ExpertSelection, SelectionOutcome};

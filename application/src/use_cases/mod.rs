//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//!
//! - [`select_expert`]: the selection step (one oracle call)
//! - [`answer_as_expert`]: the generation step (one oracle call)
//! - [`delegate`]: both steps in sequence; the entry point hosts call

pub mod answer_as_expert;
pub mod delegate;
pub mod error;
pub mod select_expert;

#[cfg(test)]
pub(crate) mod test_support;

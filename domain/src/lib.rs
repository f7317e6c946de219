//! Domain layer for expert-delegator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Expert Catalog
//!
//! A fixed, read-only mapping from expert key to persona text. It is built
//! once at startup and shared by reference for the rest of the process.
//!
//! ## Delegation
//!
//! Answering a query happens in two steps:
//!
//! - **Selection**: the oracle picks exactly one key from a [`CandidateSet`].
//!   A reply that is not a candidate falls back to the first candidate.
//! - **Generation**: the oracle answers as the chosen expert, using the
//!   persona as system instructions plus the conversation so far.

pub mod config;
pub mod core;
pub mod delegation;
pub mod expert;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, model::Model};
pub use delegation::{DelegationResult, ExpertSelection, SelectionOutcome};
pub use expert::{
    builtin::builtin_experts,
    candidates::CandidateSet,
    catalog::{CatalogError, ExpertCatalog, ExpertDescriptor},
    selection::resolve_selection,
};
pub use prompt::{CONCISENESS_SUFFIX, DelegationPrompt};
pub use session::entities::{Message, Role};

//! Expert domain.
//!
//! - [`catalog::ExpertCatalog`]: the read-only key → persona mapping
//! - [`builtin::builtin_experts`]: the personas shipped with the binary
//! - [`candidates::CandidateSet`]: the keys eligible for one selection
//! - [`selection::resolve_selection`]: match-or-fallback on an oracle reply

pub mod builtin;
pub mod candidates;
pub mod catalog;
pub mod selection;

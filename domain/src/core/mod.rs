//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the oracle model identifier
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;

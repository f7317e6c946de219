//! Candidate set value object

use super::catalog::ExpertCatalog;
use crate::core::error::DomainError;
use serde::Serialize;

/// Ordered, non-empty list of catalog keys eligible for one selection
/// (Value Object)
///
/// Every key is guaranteed to exist in the catalog the set was validated
/// against. Order only matters for the fallback: the first key wins when
/// the oracle's choice is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    keys: Vec<String>,
}

impl CandidateSet {
    /// Validate `keys` against `catalog`.
    pub fn new<I, S>(keys: I, catalog: &ExpertCatalog) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(DomainError::EmptyCandidateSet);
        }
        if let Some(unknown) = keys.iter().find(|k| !catalog.contains(k)) {
            return Err(DomainError::UnknownCandidate(unknown.clone()));
        }
        Ok(Self { keys })
    }

    /// Every key in the catalog, in definition order.
    pub fn all(catalog: &ExpertCatalog) -> Result<Self, DomainError> {
        Self::new(catalog.keys(), catalog)
    }

    /// The deterministic fallback key.
    pub fn first(&self) -> &str {
        &self.keys[0]
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

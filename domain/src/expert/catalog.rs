//! Expert catalog

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Expert key cannot be empty")]
    EmptyKey,

    #[error("Expert '{0}' has an empty persona")]
    EmptyPersona(String),

    #[error("Expert '{0}' is defined more than once")]
    DuplicateKey(String),
}

/// One expert: a stable key and the system instructions that define it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertDescriptor {
    pub key: String,
    pub persona: String,
}

impl ExpertDescriptor {
    pub fn new(key: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            persona: persona.into(),
        }
    }
}

/// Read-only mapping from expert key to persona.
///
/// Keys keep their definition order; that order is also the default
/// candidate order, so the first expert defined is the default fallback.
/// There are no mutating methods: extending the catalog consumes it and
/// returns a new one, which only happens while the process starts up.
#[derive(Debug, Clone)]
pub struct ExpertCatalog {
    experts: Vec<ExpertDescriptor>,
    index: HashMap<String, usize>,
}

impl ExpertCatalog {
    /// Build a catalog, rejecting blank keys, blank personas and duplicates.
    pub fn new(experts: Vec<ExpertDescriptor>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(experts.len());
        for (i, expert) in experts.iter().enumerate() {
            Self::check(expert)?;
            if index.insert(expert.key.clone(), i).is_some() {
                return Err(CatalogError::DuplicateKey(expert.key.clone()));
            }
        }
        Ok(Self { experts, index })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        let experts = super::builtin::builtin_experts();
        let index = experts
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key.clone(), i))
            .collect();
        Self { experts, index }
    }

    /// Add new experts or replace the persona of existing ones.
    ///
    /// Replaced experts keep their position; new experts are appended in
    /// the order given.
    pub fn with_overrides<I>(mut self, overrides: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ExpertDescriptor>,
    {
        for expert in overrides {
            Self::check(&expert)?;
            match self.index.get(&expert.key) {
                Some(&i) => self.experts[i].persona = expert.persona,
                None => {
                    self.index.insert(expert.key.clone(), self.experts.len());
                    self.experts.push(expert);
                }
            }
        }
        Ok(self)
    }

    fn check(expert: &ExpertDescriptor) -> Result<(), CatalogError> {
        if expert.key.trim().is_empty() {
            return Err(CatalogError::EmptyKey);
        }
        if expert.persona.trim().is_empty() {
            return Err(CatalogError::EmptyPersona(expert.key.clone()));
        }
        Ok(())
    }

    /// Persona for `key`, if registered.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(|e| e.persona.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&ExpertDescriptor> {
        self.index.get(key).map(|&i| &self.experts[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All registered keys in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.experts.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpertDescriptor> {
        self.experts.iter()
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}

impl Default for ExpertCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

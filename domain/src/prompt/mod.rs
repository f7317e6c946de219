//! Prompt construction for the selection and generation steps.

mod template;

pub use template::{CONCISENESS_SUFFIX, DelegationPrompt};

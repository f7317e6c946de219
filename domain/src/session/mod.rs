//! Conversation domain.
//!
//! - [`entities::Message`]: a single conversation turn
//! - [`entities::Role`]: who produced the turn

pub mod entities;

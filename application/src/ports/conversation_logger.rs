//! Port for structured conversation logging.
//!
//! [`ConversationLogger`] records what was asked, which expert was picked
//! and what it answered, as machine-readable events (JSONL in practice).
//! `tracing` covers human-readable diagnostics; this port covers the
//! transcript.

use serde_json::{Value, json};

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "expert_selected", "expert_answered").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn expert_selected(
        query: &str,
        candidates: &[String],
        chosen_key: &str,
        fallback_from: Option<&str>,
    ) -> Self {
        Self::new(
            "expert_selected",
            json!({
                "query": query,
                "candidates": candidates,
                "chosen_key": chosen_key,
                "fallback": fallback_from.is_some(),
                "oracle_reply": fallback_from,
            }),
        )
    }

    pub fn expert_answered(expert_key: &str, history_len: usize, answer: &str) -> Self {
        Self::new(
            "expert_answered",
            json!({
                "expert": expert_key,
                "history_len": history_len,
                "answer": answer,
            }),
        )
    }

    pub fn delegation_failed(query: &str, error: &str) -> Self {
        Self::new(
            "delegation_failed",
            json!({
                "query": query,
                "error": error,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; a logger that cannot write drops the
/// event rather than failing the delegation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

//! Scripted oracle shared by the use case tests.

use crate::ports::oracle_gateway::{GatewayError, OracleGateway};
use async_trait::async_trait;
use delegator_domain::{ExpertCatalog, ExpertDescriptor, Message, Model};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replies from a queue and records every request it receives.
pub(crate) struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<(Model, Vec<Message>)>>,
}

impl ScriptedOracle {
    pub(crate) fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub(crate) fn calls(&self) -> Vec<(Model, Vec<Message>)> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OracleGateway for ScriptedOracle {
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), messages.to_vec()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
    }
}

/// Two-expert catalog used across the tests.
pub(crate) fn test_catalog() -> ExpertCatalog {
    ExpertCatalog::new(vec![
        ExpertDescriptor::new("aiExpert", "You are an AI expert."),
        ExpertDescriptor::new("historyExpert", "You are a history expert."),
    ])
    .unwrap()
}

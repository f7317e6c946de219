//! Answer As Expert use case.
//!
//! Generates the final answer with the chosen expert's persona as system
//! instructions, followed by the conversation so far and the new query.

use crate::config::DelegationConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::oracle_gateway::OracleGateway;
use crate::use_cases::error::DelegationError;
use delegator_domain::util::preview;
use delegator_domain::{DelegationPrompt, ExpertCatalog, Message};
use std::sync::Arc;
use tracing::debug;

/// Use case for the generation step.
pub struct AnswerAsExpertUseCase {
    gateway: Arc<dyn OracleGateway>,
    catalog: Arc<ExpertCatalog>,
    config: DelegationConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for AnswerAsExpertUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            catalog: self.catalog.clone(),
            config: self.config.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl AnswerAsExpertUseCase {
    pub fn new(
        gateway: Arc<dyn OracleGateway>,
        catalog: Arc<ExpertCatalog>,
        config: DelegationConfig,
    ) -> Self {
        Self {
            gateway,
            catalog,
            config,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Answer `query` as `expert_key`.
    ///
    /// Returns the trimmed reply, which may be empty. An unknown key fails
    /// with [`DelegationError::UnknownExpert`] without calling the oracle.
    pub async fn answer(
        &self,
        expert_key: &str,
        history: &[Message],
        query: &str,
    ) -> Result<String, DelegationError> {
        let persona = self
            .catalog
            .lookup(expert_key)
            .ok_or_else(|| DelegationError::UnknownExpert(expert_key.to_string()))?;

        let messages = DelegationPrompt::answer_messages(persona, history, query);
        debug!(
            "Asking {} ({} history turns) with {}",
            expert_key,
            history.len(),
            self.config.model
        );

        let reply = self.gateway.complete(&self.config.model, &messages).await?;
        let answer = reply.trim().to_string();
        debug!("{} answered: {}", expert_key, preview(&answer, 100));

        self.conversation_logger
            .log(ConversationEvent::expert_answered(
                expert_key,
                history.len(),
                &answer,
            ));

        Ok(answer)
    }
}

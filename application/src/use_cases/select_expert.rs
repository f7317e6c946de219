//! Select Expert use case.
//!
//! Asks the oracle which candidate should answer a query. The reply is only
//! trusted when it names a candidate exactly; anything else falls back to
//! the first candidate so that a garbled reply never blocks an answer.

use crate::config::DelegationConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::oracle_gateway::OracleGateway;
use crate::use_cases::error::DelegationError;
use delegator_domain::util::preview;
use delegator_domain::{
    CandidateSet, DelegationPrompt, DomainError, ExpertCatalog, ExpertSelection,
    SelectionOutcome, resolve_selection,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for the selection step.
pub struct SelectExpertUseCase {
    gateway: Arc<dyn OracleGateway>,
    catalog: Arc<ExpertCatalog>,
    config: DelegationConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for SelectExpertUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            catalog: self.catalog.clone(),
            config: self.config.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl SelectExpertUseCase {
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

    /// Choose one key out of `candidate_keys` for `query`.
    ///
    /// Validates the keys first; an empty list or a key the catalog does not
    /// know fails with [`DelegationError::InvalidCandidateSet`] before any
    /// oracle call is made.
    pub async fn choose(
        &self,
        candidate_keys: &[String],
        query: &str,
    ) -> Result<String, DelegationError> {
        let candidates = CandidateSet::new(candidate_keys.iter().cloned(), &self.catalog)?;
        Ok(self.select(&candidates, query).await?.key)
    }

    /// Choose one key out of an already validated candidate set.
    ///
    /// The returned key is always a member of `candidates`. Oracle failures
    /// propagate as [`DelegationError::OracleUnavailable`]; no fallback key
    /// is produced in that case.
    pub async fn select(
        &self,
        candidates: &CandidateSet,
        query: &str,
    ) -> Result<ExpertSelection, DelegationError> {
        if let Some(unknown) = candidates.iter().find(|k| !self.catalog.contains(k)) {
            return Err(DelegationError::InvalidCandidateSet(
                DomainError::UnknownCandidate(unknown.to_string()),
            ));
        }

        let messages = DelegationPrompt::selection_messages(candidates, &self.catalog, query);
        debug!(
            "Selecting among {} candidates with {}",
            candidates.len(),
            self.config.model
        );

        let reply = self.gateway.complete(&self.config.model, &messages).await?;
        let selection = resolve_selection(&reply, candidates);

        let fallback_from = match &selection.outcome {
            SelectionOutcome::Matched => {
                debug!("Oracle selected {}", selection.key);
                None
            }
            SelectionOutcome::Fallback { returned } => {
                warn!(
                    "Oracle returned '{}', which is not a candidate; falling back to {}",
                    preview(returned, 80),
                    selection.key
                );
                Some(returned.as_str())
            }
        };

        self.conversation_logger
            .log(ConversationEvent::expert_selected(
                query,
                candidates.as_slice(),
                &selection.key,
                fallback_from,
            ));

        Ok(selection)
    }
}

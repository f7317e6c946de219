//! Delegate use case
//!
//! Orchestrates the full delegation flow: selection, then generation with the
//! selected expert. The second oracle call never starts before the first one
//! has returned a valid key.

use crate::config::DelegationConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::oracle_gateway::OracleGateway;
use crate::ports::progress::{DelegationProgress, NoProgress};
use crate::use_cases::answer_as_expert::AnswerAsExpertUseCase;
use crate::use_cases::error::DelegationError;
use crate::use_cases::select_expert::SelectExpertUseCase;
use delegator_domain::util::preview;
use delegator_domain::{CandidateSet, DelegationResult, ExpertCatalog, Message};
use std::sync::Arc;
use tracing::info;

/// Input for the [`DelegateUseCase`]
#[derive(Debug, Clone, Default)]
pub struct DelegateInput {
    /// Earlier turns of the conversation, oldest first.
    pub history: Vec<Message>,
    /// The latest user query.
    pub query: String,
    /// Keys eligible for selection; `None` means the whole catalog.
    pub candidates: Option<Vec<String>>,
}

impl DelegateInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            history: Vec::new(),
            query: query.into(),
            candidates: None,
        }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = Some(candidates);
        self
    }
}

/// Use case for running one delegation
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent requests.
pub struct DelegateUseCase {
    catalog: Arc<ExpertCatalog>,
    selector: SelectExpertUseCase,
    responder: AnswerAsExpertUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for DelegateUseCase {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            selector: self.selector.clone(),
            responder: self.responder.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl DelegateUseCase {
    pub fn new(
        gateway: Arc<dyn OracleGateway>,
        catalog: Arc<ExpertCatalog>,
        config: DelegationConfig,
    ) -> Self {
        Self {
            selector: SelectExpertUseCase::new(gateway.clone(), catalog.clone(), config.clone()),
            responder: AnswerAsExpertUseCase::new(gateway, catalog.clone(), config),
            catalog,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger shared by both steps.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.selector = self.selector.with_conversation_logger(logger.clone());
        self.responder = self.responder.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub fn catalog(&self) -> &ExpertCatalog {
        &self.catalog
    }

    /// Delegate `query` and return the chosen key with its answer.
    ///
    /// `candidate_keys` defaults to every key in the catalog.
    pub async fn handle(
        &self,
        history: &[Message],
        query: &str,
        candidate_keys: Option<&[String]>,
    ) -> Result<DelegationResult, DelegationError> {
        self.run(history, query, candidate_keys, &NoProgress).await
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: DelegateInput) -> Result<DelegationResult, DelegationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: DelegateInput,
        progress: &dyn DelegationProgress,
    ) -> Result<DelegationResult, DelegationError> {
        self.run(
            &input.history,
            &input.query,
            input.candidates.as_deref(),
            progress,
        )
        .await
    }

    async fn run(
        &self,
        history: &[Message],
        query: &str,
        candidate_keys: Option<&[String]>,
        progress: &dyn DelegationProgress,
    ) -> Result<DelegationResult, DelegationError> {
        let result = self.run_steps(history, query, candidate_keys, progress).await;
        if let Err(e) = &result {
            progress.on_failure(&e.to_string());
            self.conversation_logger
                .log(ConversationEvent::delegation_failed(query, &e.to_string()));
        }
        result
    }

    async fn run_steps(
        &self,
        history: &[Message],
        query: &str,
        candidate_keys: Option<&[String]>,
        progress: &dyn DelegationProgress,
    ) -> Result<DelegationResult, DelegationError> {
        let candidates = match candidate_keys {
            Some(keys) => CandidateSet::new(keys.iter().cloned(), &self.catalog),
            None => CandidateSet::all(&self.catalog),
        }?;

        info!(
            "Delegating query ({} candidates, {} history turns): {}",
            candidates.len(),
            history.len(),
            preview(query, 100)
        );

        progress.on_selection_start(candidates.len());
        let selection = self.selector.select(&candidates, query).await?;
        progress.on_expert_selected(&selection);

        progress.on_answer_start(&selection.key);
        let answer = self.responder.answer(&selection.key, history, query).await?;
        progress.on_answer_complete(&selection.key);

        info!("Delegation answered by {}", selection.key);
        Ok(DelegationResult::new(selection, answer))
    }
}

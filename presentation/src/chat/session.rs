//! In-memory conversation state for chat mode

use delegator_application::{DelegateInput, DelegateUseCase, DelegationError, DelegationProgress};
use delegator_domain::{DelegationResult, Message};

/// One chat conversation: the delegation use case plus the turns so far
pub struct ChatSession {
    use_case: DelegateUseCase,
    candidates: Option<Vec<String>>,
    history: Vec<Message>,
}

impl ChatSession {
    pub fn new(use_case: DelegateUseCase, candidates: Option<Vec<String>>) -> Self {
        Self {
            use_case,
            candidates,
            history: Vec::new(),
        }
    }

    pub fn use_case(&self) -> &DelegateUseCase {
        &self.use_case
    }

    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Delegate `query` with the conversation so far.
    ///
    /// A successful exchange is appended to the history as a user and an
    /// assistant message. A failed one leaves the history untouched.
    pub async fn ask(
        &mut self,
        query: &str,
        progress: &dyn DelegationProgress,
    ) -> Result<DelegationResult, DelegationError> {
        let mut input = DelegateInput::new(query).with_history(self.history.clone());
        if let Some(candidates) = &self.candidates {
            input = input.with_candidates(candidates.clone());
        }

        let result = self.use_case.execute_with_progress(input, progress).await?;

        self.history.push(Message::user(query));
        self.history.push(Message::assistant(result.answer.clone()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use delegator_application::{
        DelegationConfig, GatewayError, NoProgress, OracleGateway,
    };
    use delegator_domain::{ExpertCatalog, ExpertDescriptor, Model};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct ScriptedOracle {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedOracle {
        fn new(replies: Vec<Result<&str, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(str::to_string))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl OracleGateway for ScriptedOracle {
        async fn complete(
            &self,
            _model: &Model,
            messages: &[Message],
        ) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("no scripted reply".to_string())))
        }
    }

    fn session(oracle: Arc<ScriptedOracle>, candidates: Option<Vec<String>>) -> ChatSession {
        let catalog = ExpertCatalog::new(vec![
            ExpertDescriptor::new("aiExpert", "You are an AI expert."),
            ExpertDescriptor::new("historyExpert", "You are a history expert."),
        ])
        .unwrap();
        let use_case = DelegateUseCase::new(oracle, Arc::new(catalog), DelegationConfig::default());
        ChatSession::new(use_case, candidates)
    }

    #[tokio::test]
    async fn test_successful_exchange_extends_history() {
        let oracle = ScriptedOracle::new(vec![
            Ok("historyExpert"),
            Ok("Romulus."),
            Ok("historyExpert"),
            Ok("Augustus."),
        ]);
        let mut chat = session(oracle.clone(), None);

        chat.ask("Who founded Rome?", &NoProgress).await.unwrap();
        chat.ask("And the first emperor?", &NoProgress).await.unwrap();

        assert_eq!(
            chat.history(),
            &[
                Message::user("Who founded Rome?"),
                Message::assistant("Romulus."),
                Message::user("And the first emperor?"),
                Message::assistant("Augustus."),
            ]
        );
        // Second generation call: system, two history turns, new query
        let calls = oracle.calls.lock().unwrap();
        assert_eq!(calls[3].len(), 4);
        assert_eq!(calls[3][1], Message::user("Who founded Rome?"));
    }

    #[tokio::test]
    async fn test_failed_exchange_leaves_history_untouched() {
        let oracle = ScriptedOracle::new(vec![Err(GatewayError::Timeout)]);
        let mut chat = session(oracle, None);

        let err = chat.ask("q", &NoProgress).await.unwrap_err();

        assert!(matches!(err, DelegationError::OracleUnavailable(_)));
        assert!(chat.history().is_empty());
    }

    #[tokio::test]
    async fn test_candidates_restrict_selection() {
        let oracle = ScriptedOracle::new(vec![Ok("aiExpert"), Ok("answer")]);
        let mut chat = session(oracle.clone(), Some(vec!["historyExpert".to_string()]));

        let result = chat.ask("What is backprop?", &NoProgress).await.unwrap();

        // aiExpert is not a candidate, so the only candidate wins
        assert_eq!(result.chosen_key, "historyExpert");
        assert!(result.used_fallback());
        let listing = &oracle.calls.lock().unwrap()[0][1].content;
        assert!(!listing.contains("aiExpert"));
    }

    #[tokio::test]
    async fn test_clear_resets_history() {
        let oracle = ScriptedOracle::new(vec![Ok("aiExpert"), Ok("a")]);
        let mut chat = session(oracle, None);

        chat.ask("q", &NoProgress).await.unwrap();
        assert_eq!(chat.history().len(), 2);
        chat.clear();
        assert!(chat.history().is_empty());
    }
}

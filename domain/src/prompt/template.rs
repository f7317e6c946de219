//! Prompt templates for the delegation flow

use crate::expert::candidates::CandidateSet;
use crate::expert::catalog::ExpertCatalog;
use crate::session::entities::Message;

/// Appended verbatim to every persona when generating an answer.
pub const CONCISENESS_SUFFIX: &str =
    " Please answer in a very crisp, concise, and to-the-point manner.";

/// Templates for generating the oracle message sequences
pub struct DelegationPrompt;

impl DelegationPrompt {
    /// System prompt for the selection step
    pub fn selector_system() -> &'static str {
        "You are a master delegator. Based on the user query and the list of available expert agents provided, decide which agent is best suited to answer the query. Return only the key (for example, 'aiExpert'). Do not include any additional text."
    }

    /// User message enumerating each candidate with its persona
    pub fn candidate_listing(candidates: &CandidateSet, catalog: &ExpertCatalog) -> String {
        let mut listing = String::from("Here are the available expert agents:\n");
        for key in candidates.iter() {
            let persona = catalog.lookup(key).unwrap_or_default();
            listing.push_str(&format!("- {}: {}\n", key, persona));
        }
        listing
    }

    /// User message carrying the query for the selection step
    pub fn selection_query(query: &str) -> String {
        format!("User Query: {}", query)
    }

    /// Full message sequence for the selection step.
    ///
    /// Selection is stateless: no conversation history is included.
    pub fn selection_messages(
        candidates: &CandidateSet,
        catalog: &ExpertCatalog,
        query: &str,
    ) -> Vec<Message> {
        vec![
            Message::system(Self::selector_system()),
            Message::user(Self::candidate_listing(candidates, catalog)),
            Message::user(Self::selection_query(query)),
        ]
    }

    /// System prompt for the generation step
    pub fn expert_system(persona: &str) -> String {
        format!("{}{}", persona, CONCISENESS_SUFFIX)
    }

    /// Full message sequence for the generation step: persona, the history
    /// oldest first, then the query as the final user turn.
    pub fn answer_messages(persona: &str, history: &[Message], query: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(Self::expert_system(persona)));
        messages.extend(history.iter().cloned());
        messages.push(Message::user(query));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expert::catalog::ExpertDescriptor;
    use crate::session::entities::Role;

    fn catalog() -> ExpertCatalog {
        ExpertCatalog::new(vec![
            ExpertDescriptor::new("aiExpert", "You are an AI expert."),
            ExpertDescriptor::new("historyExpert", "You are a history expert."),
        ])
        .unwrap()
    }

    #[test]
    fn test_selection_messages_shape() {
        let catalog = catalog();
        let candidates = CandidateSet::all(&catalog).unwrap();
        let messages = DelegationPrompt::selection_messages(&candidates, &catalog, "Who was Caesar?");

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("Return only the key"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(
            messages[1].content,
            "Here are the available expert agents:\n\
             - aiExpert: You are an AI expert.\n\
             - historyExpert: You are a history expert.\n"
        );
        assert_eq!(messages[2], Message::user("User Query: Who was Caesar?"));
    }

    #[test]
    fn test_listing_only_includes_candidates() {
        let catalog = catalog();
        let candidates = CandidateSet::new(["historyExpert"], &catalog).unwrap();
        let listing = DelegationPrompt::candidate_listing(&candidates, &catalog);
        assert!(listing.contains("historyExpert"));
        assert!(!listing.contains("aiExpert"));
    }

    #[test]
    fn test_answer_messages_empty_history() {
        let messages = DelegationPrompt::answer_messages("P.", &[], "q");
        assert_eq!(
            messages,
            vec![
                Message::system("P. Please answer in a very crisp, concise, and to-the-point manner."),
                Message::user("q"),
            ]
        );
    }

    #[test]
    fn test_answer_messages_keep_history_order() {
        let history = vec![Message::user("first"), Message::assistant("reply")];
        let messages = DelegationPrompt::answer_messages("P.", &history, "second");
        let contents: Vec<_> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents[1..], ["first", "reply", "second"]);
    }
}

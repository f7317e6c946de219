//! Application layer for expert-delegator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DelegationConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    oracle_gateway::{GatewayError, OracleGateway},
    progress::{DelegationProgress, NoProgress},
};
pub use use_cases::answer_as_expert::AnswerAsExpertUseCase;
pub use use_cases::delegate::{DelegateInput, DelegateUseCase};
pub use use_cases::error::DelegationError;
pub use use_cases::select_expert::SelectExpertUseCase;

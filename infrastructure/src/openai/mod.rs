//! OpenAI-compatible chat-completions adapter
//!
//! Implements [`OracleGateway`](delegator_application::OracleGateway) on top
//! of `POST {base_url}/v1/chat/completions`. Any server speaking the same
//! wire format (Azure OpenAI proxies, local llama.cpp or LM Studio servers)
//! works by pointing `base_url` at it.

mod error;
mod gateway;
mod protocol;

pub use error::OpenAiError;
pub use gateway::{OpenAiOracleGateway, OpenAiSettings};

//! Error types for the OpenAI adapter

use delegator_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when talking to a chat-completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Response contained no choices")]
    NoChoices,
}

impl From<OpenAiError> for GatewayError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OpenAiError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OpenAiError::Http(e) if e.is_decode() => GatewayError::InvalidResponse(e.to_string()),
            OpenAiError::Http(e) => GatewayError::Other(e.to_string()),
            OpenAiError::Status { status, message } => match status {
                401 | 403 => GatewayError::AuthenticationFailed(message),
                429 => GatewayError::RateLimited(message),
                _ => GatewayError::RequestFailed { status, message },
            },
            OpenAiError::Decode(msg) => GatewayError::InvalidResponse(msg),
            OpenAiError::NoChoices => {
                GatewayError::InvalidResponse("response contained no choices".to_string())
            }
        }
    }
}

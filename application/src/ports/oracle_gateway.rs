//! Oracle Gateway port
//!
//! Defines the interface to the text-completion service that both the
//! selection and the generation step delegate to.

use async_trait::async_trait;
use delegator_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during oracle calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether repeating the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::ConnectionError(_)
            | GatewayError::Timeout
            | GatewayError::RateLimited(_) => true,
            GatewayError::RequestFailed { status, .. } => *status >= 500,
            GatewayError::AuthenticationFailed(_)
            | GatewayError::InvalidResponse(_)
            | GatewayError::Other(_) => false,
        }
    }
}

/// Gateway to the completion service
///
/// One call is one request: an ordered message sequence in, the text of the
/// first completion out. Implementations own timeouts, retries, pooling and
/// rate limiting; callers just surface whatever error comes back.
#[async_trait]
pub trait OracleGateway: Send + Sync {
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError>;
}

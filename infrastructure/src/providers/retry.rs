//! Retrying decorator for oracle gateways

use async_trait::async_trait;
use delegator_application::{GatewayError, OracleGateway};
use delegator_domain::{Message, Model};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// How often and how patiently to retry transient failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: u32,
    /// Delay before the first retry, doubled after each further attempt.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    fn backoff(&self, retry: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(retry.saturating_sub(1)))
    }
}

/// Wraps another gateway and repeats requests that failed transiently
///
/// Only [`GatewayError::is_transient`] failures are retried. The last error
/// is returned unchanged once the budget is spent.
pub struct RetryingOracle {
    inner: Arc<dyn OracleGateway>,
    policy: RetryPolicy,
}

impl RetryingOracle {
    pub fn new(inner: Arc<dyn OracleGateway>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl OracleGateway for RetryingOracle {
    async fn complete(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        let mut retry = 0;
        loop {
            match self.inner.complete(model, messages).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && retry < self.policy.max_retries => {
                    retry += 1;
                    let delay = self.policy.backoff(retry);
                    warn!(
                        "Oracle request failed ({}); retry {}/{} in {:?}",
                        e, retry, self.policy.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

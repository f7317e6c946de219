//! Oracle provider wiring
//!
//! [`build_oracle`] turns the `[providers]` configuration into the gateway
//! the use cases talk to: the OpenAI adapter, wrapped in [`RetryingOracle`]
//! when retries are enabled.

mod retry;

pub use retry::{RetryPolicy, RetryingOracle};

use crate::config::FileConfig;
use crate::openai::OpenAiOracleGateway;
use delegator_application::{GatewayError, OracleGateway};
use std::sync::Arc;

/// Build the oracle gateway described by `config`.
pub fn build_oracle(config: &FileConfig) -> Result<Arc<dyn OracleGateway>, GatewayError> {
    let openai = &config.providers.openai;
    let gateway: Arc<dyn OracleGateway> = Arc::new(OpenAiOracleGateway::new(openai.to_settings())?);

    let policy = openai.retry_policy();
    if policy.max_retries == 0 {
        return Ok(gateway);
    }
    Ok(Arc::new(RetryingOracle::new(gateway, policy)))
}

//! Infrastructure layer for expert-delegator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod openai;
pub mod providers;

// Re-export commonly used types
pub use catalog::build_catalog;
pub use config::{
    ConfigLoader, FileConfig, FileDelegationConfig, FileLoggingConfig, FileOpenAiConfig,
    FileOracleConfig, FileOutputConfig, FileProvidersConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiError, OpenAiOracleGateway, OpenAiSettings};
pub use providers::{RetryPolicy, RetryingOracle, build_oracle};

//! Configuration file loading for expert-delegator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment: `OPENAI_MODEL`, `DELEGATOR_*` (`__` separates sections)
//! 3. `--config <path>` specified file
//! 4. Project root: `./delegator.toml` or `./.delegator.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/expert-delegator/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDelegationConfig, FileLoggingConfig, FileOpenAiConfig, FileOracleConfig,
    FileOutputConfig, FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;

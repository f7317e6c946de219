//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chosen expert followed by the answer
    Text,
    /// Only the answer
    Answer,
    /// JSON object with the chosen key, answer and selection outcome
    Json,
}

impl From<OutputFormat> for delegator_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Answer => Self::Answer,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for expert-delegator
#[derive(Parser, Debug)]
#[command(name = "expert-delegator")]
#[command(author, version, about = "Route a question to the right expert persona and get its answer")]
#[command(long_about = r#"
Expert Delegator answers a question in two steps:
1. Selection: the model picks the best expert for the question out of a catalog
2. Generation: the model answers in the chosen expert's persona

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./delegator.toml           Project-level config
3. ~/.config/expert-delegator/config.toml   Global config

The API key is read from OPENAI_API_KEY (a .env file is honored).

Example:
  expert-delegator "Why did the Roman Republic fall?"
  expert-delegator -e aiExpert -e phdMathematics "Explain backpropagation"
  expert-delegator --chat -m gpt-4o-mini
"#)]
pub struct Cli {
    /// The question to delegate (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Restrict selection to these experts (can be specified multiple times)
    #[arg(short, long = "expert", value_name = "KEY")]
    pub experts: Vec<String>,

    /// Model used for selection and generation
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// List the expert catalog and exit
    #[arg(long)]
    pub list_experts: bool,

    /// Output format (defaults to the config file value, then "text")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of every delegation to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Candidate restriction from `-e`, if any was given.
    pub fn candidate_keys(&self) -> Option<Vec<String>> {
        (!self.experts.is_empty()).then(|| self.experts.clone())
    }
}

//! CLI entrypoint for Expert Delegator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use delegator_application::{
    ConversationLogger, DelegateInput, DelegateUseCase, DelegationConfig,
};
use delegator_domain::{ConfigIssue, OutputFormat, Severity};
use delegator_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, build_catalog, build_oracle,
};
use delegator_presentation::{ChatRepl, ChatSession, Cli, ConsoleFormatter, ProgressMode};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env is optional
    let _ = dotenvy::dotenv();

    init_tracing(cli.verbose);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    let catalog = Arc::new(build_catalog(&config).context("Invalid [experts] configuration")?);
    let candidates = cli
        .candidate_keys()
        .or_else(|| config.delegation.candidates.clone());

    if cli.list_experts {
        print!(
            "{}",
            ConsoleFormatter::format_catalog(&catalog, candidates.as_deref())
        );
        return Ok(());
    }

    info!("Starting Expert Delegator");

    // === Dependency Injection ===
    let model = config.parse_model();
    let gateway = build_oracle(&config)?;
    let mut use_case = DelegateUseCase::new(gateway, catalog, DelegationConfig::new(model.clone()));
    if let Some(logger) = conversation_logger(&config) {
        use_case = use_case.with_conversation_logger(logger);
    }

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(ChatSession::new(use_case, candidates), model)
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_history_file(config.repl.history_file.clone());

        repl.run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(query) = cli.query.clone() else {
        bail!("A query is required. Use --chat for interactive mode.");
    };

    let mut input = DelegateInput::new(query);
    if let Some(candidates) = candidates {
        input = input.with_candidates(candidates);
    }

    let progress = ProgressMode::detect(cli.quiet, std::io::stderr().is_terminal()).reporter();

    let result = match use_case.execute_with_progress(input, progress.as_ref()).await {
        Ok(result) => result,
        Err(e) => {
            error!("Delegation failed: {}", e);
            return Err(e.into());
        }
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format(&result),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
        OutputFormat::Json => format!("{}\n", ConsoleFormatter::format_json(&result)),
    };
    print!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when no `-v` is given
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load, override from flags and validate the configuration
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if let Some(model) = &cli.model {
        config.oracle.model = Some(model.clone());
    }
    if let Some(path) = &cli.log_file {
        config.logging.conversation_log = Some(path.clone());
    }

    report_issues(&config.validate())?;
    Ok(config)
}

/// Log every issue; fail if any of them is an error
fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }
    Ok(())
}

fn conversation_logger(config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = config.logging.conversation_log.as_ref()?;
    match JsonlConversationLogger::new(path) {
        Some(logger) => {
            info!("Recording conversation to {}", logger.path().display());
            Some(Arc::new(logger))
        }
        None => {
            warn!("Conversation log disabled: cannot write {}", path.display());
            None
        }
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat

use super::session::ChatSession;
use crate::{ConsoleFormatter, ProgressReporter};
use delegator_application::{DelegationProgress, NoProgress};
use delegator_domain::Model;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal,
};
use std::path::PathBuf;
use tracing::{error, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
    model: Model,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ChatSession, model: Model) -> Self {
        Self {
            session,
            model,
            show_progress: true,
            history_file: Self::default_history_file(),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the line-editor history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("expert-delegator").join("history.txt"))
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("delegator".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    self.process_query(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Expert Delegator - Chat Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        match self.session.candidates() {
            Some(keys) => println!("Experts: {}", keys.join(", ")),
            None => println!(
                "Experts: all {} (see /experts)",
                self.session.use_case().catalog().len()
            ),
        }
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /experts         - List the expert catalog");
        println!("  /clear           - Forget the conversation so far");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_commands();
                false
            }
            "/experts" => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_catalog(
                        self.session.use_case().catalog(),
                        self.session.candidates()
                    )
                );
                println!();
                false
            }
            "/clear" => {
                self.session.clear();
                println!("Conversation cleared.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_query(&mut self, query: &str) {
        println!();

        let reporter;
        let progress: &dyn DelegationProgress = if self.show_progress {
            reporter = ProgressReporter::new();
            &reporter
        } else {
            &NoProgress
        };

        match self.session.ask(query, progress).await {
            Ok(result) => print!("{}", ConsoleFormatter::format(&result)),
            Err(e) => {
                error!("Delegation failed: {}", e);
                eprintln!("{}", ConsoleFormatter::format_failure(&e));
            }
        }
        println!();
    }
}

//! Progress reporting for delegations

use colored::Colorize;
use delegator_application::{DelegationProgress, NoProgress};
use delegator_domain::{ExpertSelection, SelectionOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner on stderr while the oracle is working
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn fallback_line(selection: &ExpertSelection) -> Option<String> {
        match &selection.outcome {
            SelectionOutcome::Matched => None,
            SelectionOutcome::Fallback { returned } => Some(format!(
                "{} selector replied '{}', using {}",
                "!".yellow(),
                returned,
                selection.key
            )),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DelegationProgress for ProgressReporter {
    fn on_selection_start(&self, candidates: usize) {
        self.start(format!("Choosing among {} experts...", candidates));
    }

    fn on_expert_selected(&self, selection: &ExpertSelection) {
        self.stop();
        if let Some(line) = Self::fallback_line(selection) {
            eprintln!("{}", line);
        }
    }

    fn on_answer_start(&self, expert_key: &str) {
        self.start(format!("Asking {}...", expert_key.bold()));
    }

    fn on_answer_complete(&self, _expert_key: &str) {
        self.stop();
    }

    fn on_failure(&self, _message: &str) {
        self.stop();
    }
}

/// Which progress display a run should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// No progress output at all
    Off,
    /// Animated spinner
    Spinner,
    /// One plain line per step, for logs and pipes
    Plain,
}

impl ProgressMode {
    /// Spinner on a terminal, plain lines otherwise; `quiet` wins.
    pub fn detect(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => Self::Off,
            (false, true) => Self::Spinner,
            (false, false) => Self::Plain,
        }
    }

    pub fn reporter(self) -> Box<dyn DelegationProgress> {
        match self {
            Self::Off => Box::new(NoProgress),
            Self::Spinner => Box::new(ProgressReporter::new()),
            Self::Plain => Box::new(SimpleProgress),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DelegationProgress for SimpleProgress {
    fn on_selection_start(&self, candidates: usize) {
        eprintln!("{} Choosing among {} experts", "->".cyan(), candidates);
    }

    fn on_expert_selected(&self, selection: &ExpertSelection) {
        match ProgressReporter::fallback_line(selection) {
            Some(line) => eprintln!("  {}", line),
            None => eprintln!("  {} {}", "v".green(), selection.key),
        }
    }

    fn on_failure(&self, message: &str) {
        eprintln!("  {} {}", "x".red(), message);
    }
}

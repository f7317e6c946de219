//! Console output formatter for delegation results

use colored::Colorize;
use delegator_application::DelegationError;
use delegator_domain::util::preview;
use delegator_domain::{DelegationResult, ExpertCatalog, SelectionOutcome};

/// Printed instead of a blank answer.
pub const EMPTY_ANSWER_NOTICE: &str = "(The expert returned an empty answer.)";

/// Formats delegation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colors off for the rest of the process; `colored` decides otherwise.
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Chosen expert header followed by the answer
    pub fn format(result: &DelegationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Expert:".cyan().bold(),
            result.chosen_key.yellow().bold()
        ));
        if let SelectionOutcome::Fallback { returned } = &result.selection {
            output.push_str(&format!(
                "{}\n",
                format!(
                    "(selector replied '{}', used the first candidate instead)",
                    preview(returned, 60)
                )
                .dimmed()
            ));
        }
        output.push('\n');
        output.push_str(&Self::format_answer_only(result));

        output
    }

    /// Format as JSON
    pub fn format_json(result: &DelegationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Only the answer, or a notice when it is blank
    pub fn format_answer_only(result: &DelegationResult) -> String {
        if result.is_empty_answer() {
            format!("{}\n", EMPTY_ANSWER_NOTICE.dimmed())
        } else {
            format!("{}\n", result.answer)
        }
    }

    /// One line per expert; `highlight` marks the active candidates.
    pub fn format_catalog(catalog: &ExpertCatalog, highlight: Option<&[String]>) -> String {
        let width = catalog.keys().map(str::len).max().unwrap_or(0);
        let mut output = format!("{}\n", "Experts:".cyan().bold());

        for expert in catalog.iter() {
            let active = highlight.is_none_or(|keys| keys.contains(&expert.key));
            let marker = if active { "*" } else { " " };
            let line = format!(
                "  {} {:<width$}  {}",
                marker,
                expert.key,
                preview(&expert.persona, 70),
                width = width
            );
            if active {
                output.push_str(&line);
            } else {
                output.push_str(&line.dimmed().to_string());
            }
            output.push('\n');
        }

        output
    }

    /// Apology line shown in chat mode when a delegation fails
    pub fn format_failure(error: &DelegationError) -> String {
        let hint = if error.is_contract_violation() {
            " Check the -e/--expert keys with --list-experts."
        } else {
            " Please try again."
        };
        format!(
            "{} {}{}",
            "Sorry, I couldn't get an answer:".red().bold(),
            error,
            hint
        )
    }
}

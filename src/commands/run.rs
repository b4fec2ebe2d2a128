//! `todo-history run` command.

use std::path::Path;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::stepping::clock::SteppingClock;
use crate::config::{Config, OutputFormat};
use crate::history::{HistoryEntry, TaskHistoryStore};
use crate::ports::Clock;
use crate::script::{Report, Script};

/// Execute the `run` command.
///
/// Loads the script, runs it against a fresh store and prints every report.
///
/// # Errors
///
/// Returns an error string if the script cannot be loaded or the reports
/// cannot be rendered.
pub fn run(path: &Path, frozen_clock: bool, config: &Config) -> Result<(), String> {
    let script = Script::load(path)?;
    let clock: Box<dyn Clock> =
        if frozen_clock { Box::new(SteppingClock::default()) } else { Box::new(LiveClock) };
    let mut store = TaskHistoryStore::with_clock(config.history_limit, clock);
    tracing::debug!(steps = script.steps.len(), limit = %config.history_limit, "running script");
    let reports = script.execute(&mut store);
    print_reports(&reports, config.format)
}

/// Print reports to stdout in the requested format.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn print_reports(reports: &[Report], format: OutputFormat) -> Result<(), String> {
    let rendered = render_reports(reports, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Render reports as text blocks separated by blank lines, or as a JSON array.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render_reports(reports: &[Report], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports)
            .map_err(|e| format!("Failed to serialize reports: {e}")),
        OutputFormat::Text => {
            Ok(reports.iter().map(render_text).collect::<Vec<_>>().join("\n\n"))
        }
    }
}

fn render_text(report: &Report) -> String {
    match report {
        Report::View { label, filter, tasks } => {
            let heading = label.clone().unwrap_or_else(|| format!("Tasks ({filter}):"));
            let heading = if heading.ends_with(':') { heading } else { format!("{heading}:") };
            let mut lines = vec![heading];
            if tasks.is_empty() {
                lines.push("  (no tasks)".to_string());
            }
            lines.extend(tasks.iter().map(|t| format!("  {t}")));
            lines.join("\n")
        }
        Report::History { undo, redo } => {
            let mut rows: Vec<(&str, String, String, String)> = Vec::new();
            // Top of each stack first.
            rows.extend(undo.iter().rev().map(|e| history_row("undo", e)));
            rows.extend(redo.iter().rev().map(|e| history_row("redo", e)));
            if rows.is_empty() {
                return "History: (empty)".to_string();
            }

            let stack_width = 5;
            let action_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(6).max(6);
            let task_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(4).max(4);

            let mut lines = vec![format!(
                "{:<stack_width$}  {:<action_width$}  {:<task_width$}  {}",
                "STACK", "ACTION", "TASK", "RECORDED AT",
            )];
            lines.push(format!(
                "{:-<stack_width$}  {:-<action_width$}  {:-<task_width$}  {:-<20}",
                "", "", "", "",
            ));
            for (stack, action, task, at) in rows {
                lines.push(format!(
                    "{stack:<stack_width$}  {action:<action_width$}  {task:<task_width$}  {at}"
                ));
            }
            lines.join("\n")
        }
    }
}

fn history_row(stack: &'static str, entry: &HistoryEntry) -> (&'static str, String, String, String) {
    (
        stack,
        entry.memento.label().to_string(),
        entry.memento.description().unwrap_or("-").to_string(),
        entry.recorded_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    )
}

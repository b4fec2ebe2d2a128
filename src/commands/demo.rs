//! `todo-history demo` command.

use crate::config::Config;
use crate::history::TaskHistoryStore;
use crate::script::Script;

use super::run::print_reports;

/// Execute the `demo` command.
///
/// # Errors
///
/// Returns an error string if the reports cannot be rendered.
pub fn run(config: &Config) -> Result<(), String> {
    let mut store = TaskHistoryStore::with_limit(config.history_limit);
    let reports = Script::demo().execute(&mut store);
    print_reports(&reports, config.format)
}

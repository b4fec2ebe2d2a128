//! Core library entry for the `todo-history` CLI.
//!
//! The heart of the crate is [`history::TaskHistoryStore`]: an ordered task
//! list whose add, complete and delete operations are journaled for linear
//! undo/redo. Everything else drives or displays that store.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod history;
pub mod logging;
pub mod ports;
pub mod script;
pub mod task;

use clap::error::ErrorKind;
use clap::Parser;

pub use history::{HistoryLimit, TaskHistoryStore, ViewFilter};
pub use task::{Task, TaskBuilder, TaskSnapshot};

/// Run the CLI with the provided arguments.
///
/// Configuration comes from the process environment, overridden by flags.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, configuration is
/// invalid, or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = config::Config::from_env()?.with_overrides(cli.history_depth, cli.format);
    commands::dispatch(&cli.command, &config)
}

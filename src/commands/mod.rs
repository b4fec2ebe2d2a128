//! Command dispatch and handlers.

pub mod demo;
pub mod run;

use crate::cli::Command;
use crate::config::Config;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    match command {
        Command::Demo => demo::run(config),
        Command::Run { script, frozen_clock } => run::run(script, *frozen_clock, config),
    }
}

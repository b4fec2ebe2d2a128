//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;
use crate::history::HistoryLimit;

/// Top-level CLI parser for `todo-history`.
#[derive(Debug, Parser)]
#[command(name = "todo-history", version, about = "Task list with undo/redo history")]
pub struct Cli {
    /// Maximum entries kept on each history stack (`unbounded` or a positive count).
    #[arg(long, global = true, value_name = "N")]
    pub history_depth: Option<HistoryLimit>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through the groceries/report/mom example.
    Demo,
    /// Execute a YAML or JSON script of task operations.
    Run {
        /// Path to the script file (`.yaml`, `.yml` or `.json`).
        script: PathBuf,
        /// Stamp history entries from a deterministic clock.
        #[arg(long)]
        frozen_clock: bool,
    },
}

//! Runtime configuration.
//!
//! Values resolve in order: defaults, `.env`, process environment, then
//! CLI flags. The `.env` file is loaded into the process environment by
//! [`load_dotenv`] before anything reads it.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;

use crate::history::HistoryLimit;

/// Environment variable holding the history depth (`unbounded` or a positive count).
pub const DEPTH_VAR: &str = "TODO_HISTORY_DEPTH";
/// Environment variable holding the output format (`text` or `json`).
pub const FORMAT_VAR: &str = "TODO_HISTORY_FORMAT";
/// Environment variable that turns on debug logging when set.
pub const DEBUG_VAR: &str = "TODO_HISTORY_DEBUG";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines and tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Depth bound applied to both history stacks.
    pub history_limit: HistoryLimit,
    /// Output rendering.
    pub format: OutputFormat,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, treating `None` as unset.
    ///
    /// # Errors
    ///
    /// Returns an error string if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(DEPTH_VAR) {
            config.history_limit = raw.parse().map_err(|e| format!("{DEPTH_VAR}: {e}"))?;
        }
        if let Some(raw) = lookup(FORMAT_VAR) {
            config.format = raw.parse().map_err(|e| format!("{FORMAT_VAR}: {e}"))?;
        }
        Ok(config)
    }

    /// Applies CLI flag overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(
        mut self,
        history_limit: Option<HistoryLimit>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(limit) = history_limit {
            self.history_limit = limit;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

/// Loads `.env` from the working directory or its parents, if present,
/// returning the file that was loaded.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

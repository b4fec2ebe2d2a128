//! Status filter for task views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which tasks a view includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewFilter {
    /// Every task.
    #[default]
    All,
    /// Only completed tasks.
    Completed,
    /// Only tasks not yet completed.
    Pending,
}

impl ViewFilter {
    /// Parses a filter name. Unrecognized names fall back to [`ViewFilter::All`].
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        match name {
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            _ => Self::All,
        }
    }

    /// Whether `task` belongs in this view.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.is_completed(),
            Self::Pending => !task.is_completed(),
        }
    }

    /// Filter name as accepted by [`ViewFilter::parse_lossy`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

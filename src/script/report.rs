//! Output produced by `view` and `history` steps.

use serde::Serialize;

use crate::history::{HistoryEntry, ViewFilter};
use crate::task::Task;

/// Result of a reporting step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    /// Tasks matching a filter, in list order.
    View {
        /// Optional heading.
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        /// Filter that was applied.
        filter: ViewFilter,
        /// Matching tasks.
        tasks: Vec<Task>,
    },
    /// Contents of both history stacks, oldest first.
    History {
        /// Undo stack.
        undo: Vec<HistoryEntry>,
        /// Redo stack.
        redo: Vec<HistoryEntry>,
    },
}

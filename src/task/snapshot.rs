//! Immutable captures of a task's fields.

use serde::{Deserialize, Serialize};

use super::builder::TaskBuilder;
use super::model::Task;

/// Frozen copy of a task's fields at the moment of a history-relevant action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task description.
    pub description: String,
    /// Task due date, if any.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Completion flag as it was when captured.
    pub completed: bool,
}

impl TaskSnapshot {
    /// Captures the current fields of `task`.
    #[must_use]
    pub fn capture(task: &Task) -> Self {
        Self {
            description: task.description().to_string(),
            due_date: task.due_date().map(String::from),
            completed: task.is_completed(),
        }
    }

    /// Rebuilds a task with the captured fields.
    #[must_use]
    pub fn restore(&self) -> Task {
        self.builder().completed(self.completed).build()
    }

    /// Rebuilds a task with the completion flag flipped.
    ///
    /// Only the completion flag can be reversed this way; any other mutable
    /// field would need a before/after pair instead.
    #[must_use]
    pub fn restore_inverted(&self) -> Task {
        self.builder().completed(!self.completed).build()
    }

    fn builder(&self) -> TaskBuilder {
        TaskBuilder::new(self.description.clone()).maybe_due_date(self.due_date.clone())
    }
}

//! Live task entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::builder::TaskBuilder;

/// A single entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    description: String,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl Task {
    pub(super) fn from_parts(
        description: String,
        due_date: Option<String>,
        completed: bool,
    ) -> Self {
        Self { description, due_date, completed }
    }

    /// Starts building a task with the given description.
    #[must_use]
    pub fn builder(description: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(description)
    }

    /// The description, which doubles as the task's identity in a store.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The due date, if one was set. Never parsed or validated.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    /// Whether the task has been completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Marks the task as completed.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Status label used in the display line.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}, Due: {}",
            self.description,
            self.status_label(),
            self.due_date.as_deref().unwrap_or("None")
        )
    }
}

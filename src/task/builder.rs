//! Step-by-step construction of tasks.

use super::model::Task;

/// Builder for [`Task`].
///
/// Defaults to no due date and a pending task.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct TaskBuilder {
    description: String,
    due_date: Option<String>,
    completed: bool,
}

impl TaskBuilder {
    /// Creates a builder for a task with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), due_date: None, completed: false }
    }

    /// Sets the due date.
    pub fn due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets or clears the due date.
    pub fn maybe_due_date(mut self, due_date: Option<String>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the initial completion state.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Finishes construction.
    pub fn build(self) -> Task {
        Task::from_parts(self.description, self.due_date, self.completed)
    }
}

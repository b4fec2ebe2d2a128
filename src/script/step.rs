//! Individual script steps.

use serde::{Deserialize, Serialize};

use super::report::Report;
use crate::history::{TaskHistoryStore, ViewFilter};
use crate::task::Task;

/// One operation in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Build a task and add it.
    Add {
        /// Task description.
        description: String,
        /// Optional due date, kept verbatim.
        #[serde(default)]
        due_date: Option<String>,
        /// Initial completion state.
        #[serde(default)]
        completed: bool,
    },
    /// Mark the first matching task completed.
    Complete {
        /// Description to match.
        description: String,
    },
    /// Delete the first matching task.
    Delete {
        /// Description to match.
        description: String,
    },
    /// Undo the last action.
    Undo,
    /// Redo the last undone action.
    Redo,
    /// Report the tasks matching a filter.
    View {
        /// Filter name; unknown or missing names show everything.
        #[serde(default)]
        filter: Option<String>,
        /// Heading printed above the view.
        #[serde(default)]
        label: Option<String>,
    },
    /// Report both history stacks.
    History,
}

impl Step {
    /// Applies the step, returning a report for `view` and `history`.
    pub fn apply(&self, store: &mut TaskHistoryStore) -> Option<Report> {
        match self {
            Self::Add { description, due_date, completed } => {
                let task = Task::builder(description.clone())
                    .maybe_due_date(due_date.clone())
                    .completed(*completed)
                    .build();
                store.add_task(task);
                None
            }
            Self::Complete { description } => {
                store.mark_completed(description);
                None
            }
            Self::Delete { description } => {
                store.delete_task(description);
                None
            }
            Self::Undo => {
                if !store.undo() {
                    tracing::debug!("script undo: nothing to undo");
                }
                None
            }
            Self::Redo => {
                if !store.redo() {
                    tracing::debug!("script redo: nothing to redo");
                }
                None
            }
            Self::View { filter, label } => {
                let filter = filter.as_deref().map(ViewFilter::parse_lossy).unwrap_or_default();
                Some(Report::View {
                    label: label.clone(),
                    filter,
                    tasks: store.filtered(filter).cloned().collect(),
                })
            }
            Self::History => Some(Report::History {
                undo: store.undo_entries().to_vec(),
                redo: store.redo_entries().to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_with_unknown_filter_shows_everything() {
        let mut store = TaskHistoryStore::new();
        Step::Add { description: "a".into(), due_date: None, completed: true }.apply(&mut store);
        Step::Add { description: "b".into(), due_date: None, completed: false }.apply(&mut store);
        let report = Step::View { filter: Some("finished".into()), label: None }.apply(&mut store);
        match report {
            Some(Report::View { filter, tasks, .. }) => {
                assert_eq!(filter, ViewFilter::All);
                assert_eq!(tasks.len(), 2);
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn mutating_steps_produce_no_report() {
        let mut store = TaskHistoryStore::new();
        assert!(Step::Undo.apply(&mut store).is_none());
        assert!(Step::Delete { description: "x".into() }.apply(&mut store).is_none());
        assert_eq!(store.undo_depth(), 1);
    }

    #[test]
    fn history_reports_both_stacks() {
        let mut store = TaskHistoryStore::new();
        Step::Add { description: "a".into(), due_date: None, completed: false }.apply(&mut store);
        Step::Add { description: "b".into(), due_date: None, completed: false }.apply(&mut store);
        Step::Undo.apply(&mut store);
        match Step::History.apply(&mut store) {
            Some(Report::History { undo, redo }) => {
                assert_eq!(undo.len(), 1);
                assert_eq!(redo.len(), 1);
                assert_eq!(redo[0].memento.description(), Some("b"));
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }
}

//! History records pushed onto the undo and redo stacks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskSnapshot;

/// The forward action a field snapshot was taken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// The task was appended to the list.
    Added,
    /// The task was marked completed.
    Completed,
}

/// How to reverse (or replay) one history step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Memento {
    /// Captured task fields.
    FieldSnapshot {
        /// Fields as they were right after the forward action.
        snapshot: TaskSnapshot,
        /// The forward action that produced the snapshot.
        origin: Origin,
    },
    /// A delete happened. Reversing it drops the last task by position,
    /// whatever its description.
    DeletionMarker,
}

impl Memento {
    /// Short label for tables and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::FieldSnapshot { origin: Origin::Added, .. } => "add",
            Self::FieldSnapshot { origin: Origin::Completed, .. } => "complete",
            Self::DeletionMarker => "delete",
        }
    }

    /// Description of the captured task, if this is a field snapshot.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::FieldSnapshot { snapshot, .. } => Some(&snapshot.description),
            Self::DeletionMarker => None,
        }
    }
}

/// A memento stamped with the time it was pushed onto a stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The history record.
    #[serde(flatten)]
    pub memento: Memento,
    /// When the entry was pushed.
    pub recorded_at: DateTime<Utc>,
}

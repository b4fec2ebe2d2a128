//! The task list and its undo/redo stacks.

use tracing::{debug, trace};

use super::filter::ViewFilter;
use super::limit::HistoryLimit;
use super::memento::{HistoryEntry, Memento, Origin};
use crate::adapters::live::clock::LiveClock;
use crate::ports::Clock;
use crate::task::{Task, TaskSnapshot};

/// Ordered task list with linear undo/redo history.
///
/// Tasks are matched by description everywhere; with duplicate descriptions
/// only the first match is completed or deleted. Undoing a delete removes
/// the last task by position rather than restoring the deleted one.
pub struct TaskHistoryStore {
    tasks: Vec<Task>,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    limit: HistoryLimit,
    clock: Box<dyn Clock>,
}

impl TaskHistoryStore {
    /// Creates an empty store with unbounded history and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(HistoryLimit::Unbounded, Box::new(LiveClock))
    }

    /// Creates an empty store whose stacks keep at most `limit` entries.
    #[must_use]
    pub fn with_limit(limit: HistoryLimit) -> Self {
        Self::with_clock(limit, Box::new(LiveClock))
    }

    /// Creates an empty store stamping history entries from `clock`.
    #[must_use]
    pub fn with_clock(limit: HistoryLimit, clock: Box<dyn Clock>) -> Self {
        Self { tasks: Vec::new(), undo_stack: Vec::new(), redo_stack: Vec::new(), limit, clock }
    }

    /// Appends `task` and journals it.
    pub fn add_task(&mut self, task: Task) {
        debug!(description = task.description(), "add task");
        let snapshot = TaskSnapshot::capture(&task);
        self.tasks.push(task);
        self.record(Memento::FieldSnapshot { snapshot, origin: Origin::Added });
    }

    /// Marks the first task with `description` as completed.
    ///
    /// Does nothing, and journals nothing, when no task matches.
    pub fn mark_completed(&mut self, description: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.description() == description) else {
            debug!(description, "mark completed: no matching task");
            return;
        };
        task.mark_completed();
        let snapshot = TaskSnapshot::capture(task);
        debug!(description, "mark completed");
        self.record(Memento::FieldSnapshot { snapshot, origin: Origin::Completed });
    }

    /// Removes the first task with `description`.
    ///
    /// A deletion marker is journaled even when nothing matched.
    pub fn delete_task(&mut self, description: &str) {
        if let Some(index) = self.position_of(description) {
            self.tasks.remove(index);
            debug!(description, index, "delete task");
        } else {
            debug!(description, "delete task: no matching task, journaling marker anyway");
        }
        self.record(Memento::DeletionMarker);
    }

    /// Reverses the most recent journaled action.
    ///
    /// Returns `false` without touching anything when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.undo_stack.pop() else {
            trace!("undo: stack empty");
            return false;
        };
        debug!(action = entry.memento.label(), "undo");
        match &entry.memento {
            Memento::FieldSnapshot { snapshot, origin: Origin::Completed } => {
                self.replace_or_append(snapshot.restore_inverted());
            }
            Memento::FieldSnapshot { snapshot, origin: Origin::Added } => {
                if let Some(index) = self.last_position_of(&snapshot.description) {
                    self.tasks.remove(index);
                }
            }
            Memento::DeletionMarker => {
                self.tasks.pop();
            }
        }
        let stamped = self.stamp(entry.memento);
        Self::push_bounded(&mut self.redo_stack, stamped, self.limit);
        true
    }

    /// Replays the most recently undone action.
    ///
    /// Returns `false` without touching anything when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.redo_stack.pop() else {
            trace!("redo: stack empty");
            return false;
        };
        debug!(action = entry.memento.label(), "redo");
        match &entry.memento {
            Memento::FieldSnapshot { snapshot, origin: Origin::Completed } => {
                self.replace_or_append(snapshot.restore());
            }
            Memento::FieldSnapshot { snapshot, origin: Origin::Added } => {
                self.tasks.push(snapshot.restore());
            }
            Memento::DeletionMarker => {
                self.tasks.pop();
            }
        }
        let stamped = self.stamp(entry.memento);
        Self::push_bounded(&mut self.undo_stack, stamped, self.limit);
        true
    }

    /// Display lines for every task matching `filter`, in list order.
    #[must_use]
    pub fn view_tasks(&self, filter: ViewFilter) -> Vec<String> {
        self.filtered(filter).map(ToString::to_string).collect()
    }

    /// Tasks matching `filter`, in list order.
    pub fn filtered(&self, filter: ViewFilter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// All tasks in list order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether [`TaskHistoryStore::undo`] would do anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether [`TaskHistoryStore::redo`] would do anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of entries on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Undo entries, oldest first.
    #[must_use]
    pub fn undo_entries(&self) -> &[HistoryEntry] {
        &self.undo_stack
    }

    /// Redo entries, oldest first.
    #[must_use]
    pub fn redo_entries(&self) -> &[HistoryEntry] {
        &self.redo_stack
    }

    /// The configured stack depth bound.
    #[must_use]
    pub fn limit(&self) -> HistoryLimit {
        self.limit
    }

    /// Journals a forward action and prunes the redo branch.
    fn record(&mut self, memento: Memento) {
        let stamped = self.stamp(memento);
        Self::push_bounded(&mut self.undo_stack, stamped, self.limit);
        if !self.redo_stack.is_empty() {
            trace!(discarded = self.redo_stack.len(), "clearing redo stack");
            self.redo_stack.clear();
        }
    }

    fn stamp(&self, memento: Memento) -> HistoryEntry {
        HistoryEntry { memento, recorded_at: self.clock.now() }
    }

    fn push_bounded(stack: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: HistoryLimit) {
        stack.push(entry);
        let excess = limit.excess(stack.len());
        if excess > 0 {
            trace!(excess, "trimming oldest history entries");
            stack.drain(..excess);
        }
    }

    /// Puts `task` where the first same-description task stands, or at the end.
    fn replace_or_append(&mut self, task: Task) {
        match self.position_of(task.description()) {
            Some(index) => self.tasks[index] = task,
            None => self.tasks.push(task),
        }
    }

    fn position_of(&self, description: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.description() == description)
    }

    fn last_position_of(&self, description: &str) -> Option<usize> {
        self.tasks.iter().rposition(|t| t.description() == description)
    }
}

impl Default for TaskHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

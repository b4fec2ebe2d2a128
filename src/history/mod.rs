//! Task list with linear undo/redo history.
//!
//! Every forward mutation journals a [`Memento`] describing how to reverse
//! it. Undo and redo walk that journal without branching: a new forward
//! mutation after an undo discards the redo side.

mod filter;
mod limit;
mod memento;
mod store;

pub use filter::ViewFilter;
pub use limit::HistoryLimit;
pub use memento::{HistoryEntry, Memento, Origin};
pub use store::TaskHistoryStore;

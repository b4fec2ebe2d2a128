//! Task types: the live entity, its builder, and frozen snapshots.
//!
//! Tasks are identified by their description within a store. Only the
//! completion flag participates in reversible mutation.

mod builder;
mod model;
mod snapshot;

pub use builder::TaskBuilder;
pub use model::Task;
pub use snapshot::TaskSnapshot;

//! Port traits defining external boundaries.
//!
//! The history store only reaches outside itself for the current time.
//! Implementations live in `src/adapters/`.

pub mod clock;

pub use clock::Clock;

//! Live adapters backed by the real system.

pub mod clock;

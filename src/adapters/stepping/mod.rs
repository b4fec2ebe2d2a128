//! Deterministic adapters for tests and reproducible runs.

pub mod clock;

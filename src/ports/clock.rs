//! Clock port for stamping history entries.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Substituting a stepping clock makes history timestamps deterministic in
/// tests and in `run --frozen-clock`.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

//! System-time adapter for the Clock port.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Stamps history entries with the real current time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

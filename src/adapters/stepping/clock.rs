//! Stepping adapter for the Clock port.

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::ports::clock::Clock;

/// Clock that starts at a fixed instant and advances by a fixed step on
/// every call.
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    /// Creates a clock whose first reading is `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self { next: Mutex::new(start), step }
    }
}

impl Default for SteppingClock {
    /// Starts at 2023-09-20T00:00:00Z and advances one second per reading.
    fn default() -> Self {
        let start = Utc.with_ymd_and_hms(2023, 9, 20, 0, 0, 0).single().unwrap_or_default();
        Self::new(start, Duration::seconds(1))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let current = *next;
        *next = current + self.step;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reading_is_the_start() {
        let clock = SteppingClock::default();
        assert_eq!(clock.now().to_rfc3339(), "2023-09-20T00:00:00+00:00");
    }

    #[test]
    fn advances_by_step() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock = SteppingClock::new(start, Duration::minutes(1));
        clock.now();
        assert_eq!(clock.now().to_rfc3339(), "2024-01-01T00:01:00+00:00");
    }
}

//! Mock clock for testing.

use crate::application::ports::Clock;
use chrono::{DateTime, FixedOffset};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock clock for testing.
///
/// Allows tests to pin the wall-clock time and UTC offset that appear in
/// rendered lines.
///
/// # Examples
///
/// ```
/// use log_budget::infrastructure::mocks::MockClock;
/// use log_budget::application::ports::Clock;
/// use chrono::{FixedOffset, TimeZone};
/// use std::time::Duration;
///
/// let start = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let clock = MockClock::new(start);
/// assert_eq!(clock.now(), start);
///
/// clock.advance(Duration::from_secs(90));
/// assert_eq!(clock.now().format("%H:%M:%S").to_string(), "00:01:30");
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying time value, so advancing time in
/// one clone affects all clones.
#[derive(Debug, Clone)]
pub struct MockClock {
    current_time: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl MockClock {
    /// Create a mock clock starting at a specific time.
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            current_time: Arc::new(Mutex::new(start)),
        }
    }

    /// Advance the clock by a duration.
    pub fn advance(&self, duration: Duration) {
        let delta = chrono::Duration::from_std(duration).expect("MockClock advance out of range");
        let mut time = self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock");
        *time += delta;
    }

    /// Set the clock to a specific time.
    pub fn set(&self, time: DateTime<FixedOffset>) {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock") = time;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self
            .current_time
            .lock()
            .expect("MockClock mutex poisoned - a test thread panicked while holding the lock")
    }
}

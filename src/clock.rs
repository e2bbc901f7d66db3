//! Injectable wall-clock abstraction.
//!
//! Draw detection, scoring, and the timer all read wall-clock time. The
//! engine takes the clock as a parameter so production code uses the system
//! clock while tests inject a fixed instant.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
///
/// Used by tests, and by the minimax tier to keep draw evaluation stable
/// across a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

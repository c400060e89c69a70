//! Clock abstraction for deterministic timestamps.

use chrono::{DateTime, Utc};

/// Source of the current time, injected wherever a timestamp is recorded
/// (e.g. when an outbound message is stamped).
pub trait Clock: Send + Sync {
    /// Returns the current time.
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

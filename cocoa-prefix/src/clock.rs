//! Time source for the class-name prefix.

use chrono::{DateTime, Utc};

/// Source of the current Unix timestamp in whole seconds.
pub trait Clock {
    fn unix_seconds(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> u64 {
        seconds_since_epoch(Utc::now())
    }
}

/// Clock pinned to a single instant, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_seconds(&self) -> u64 {
        self.0
    }
}

/// Pre-epoch instants clamp to 0 so the prefix never contains a sign.
fn seconds_since_epoch(at: DateTime<Utc>) -> u64 {
    u64::try_from(at.timestamp()).unwrap_or(0)
}

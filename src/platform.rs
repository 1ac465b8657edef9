//! Platform time: a monotonic nanosecond clock and a wall-clock seed.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Monotonic nanosecond clock. The epoch is the moment [`Clock::start`]
/// was called, so readings start near zero and never go backward.
#[derive(Debug, Clone)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds since the clock started.
    pub fn now_ns(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Wall-clock-derived seed for non-reproducible runs.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

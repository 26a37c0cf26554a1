//! Timestamp sources for the harness.

use std::time::Instant;

/// A monotonic millisecond clock with sub-millisecond resolution.
///
/// Readings are relative to an origin chosen by the implementation and
/// only meaningful when subtracted from one another.
pub trait Clock {
    /// Current reading, in milliseconds since the clock's origin.
    fn now_ms(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// [`Clock`] backed by [`Instant`], with its origin at construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

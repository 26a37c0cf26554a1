//! Test utilities and mock types for greet development.
//!
//! Provides a deterministic [`SteppingClock`] implementing [`Clock`] and
//! a handful of standard requests in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use greet_harness::Clock;

pub use fixtures::{adult_request, boundary_request, minor_request, sample_requests};

/// Mock implementation of [`Clock`].
///
/// Returns `start` on the first reading and advances by `step` after
/// every reading, so a single measured call always spans exactly one
/// `step`. A negative step simulates a clock running backwards.
#[derive(Debug)]
pub struct SteppingClock {
    now: Cell<f64>,
    step: f64,
    readings: Cell<usize>,
}

impl SteppingClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            now: Cell::new(start),
            step,
            readings: Cell::new(0),
        }
    }

    /// Clock that never advances.
    pub fn frozen(at: f64) -> Self {
        Self::new(at, 0.0)
    }

    /// Number of times the clock has been read.
    pub fn readings(&self) -> usize {
        self.readings.get()
    }
}

impl Clock for SteppingClock {
    fn now_ms(&self) -> f64 {
        let v = self.now.get();
        self.now.set(v + self.step);
        self.readings.set(self.readings.get() + 1);
        v
    }
}

//! Raw timing data for a single measured call.

/// Clock readings taken around one greeter invocation.
///
/// Both readings are in milliseconds, in the clock's own frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CallMetrics {
    /// Reading taken immediately before the call.
    pub start_ms: f64,
    /// Reading taken immediately after the call returned.
    pub end_ms: f64,
}

impl CallMetrics {
    /// Elapsed milliseconds. Never negative: a clock that ran backwards
    /// yields zero.
    pub fn elapsed_ms(&self) -> f64 {
        let d = self.end_ms - self.start_ms;
        if d > 0.0 {
            d
        } else {
            0.0
        }
    }

    /// Whether the end reading precedes the start reading.
    pub fn is_clock_skewed(&self) -> bool {
        self.end_ms < self.start_ms
    }

    /// Elapsed milliseconds multiplied by `scale`, saturating at
    /// `f64::MAX` instead of overflowing to infinity.
    pub fn scaled(&self, scale: f64) -> f64 {
        (self.elapsed_ms() * scale).min(f64::MAX)
    }
}

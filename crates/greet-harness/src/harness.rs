//! The timing harness: measure one greeter call and report it.

use std::error::Error;
use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};

use greet_core::GreetingRequest;

use crate::clock::{Clock, MonotonicClock};
use crate::config::{ConfigError, HarnessConfig};
use crate::metrics::CallMetrics;

// ── HarnessError ───────────────────────────────────────────────────

/// Errors from building or running a [`TimingHarness`].
#[derive(Debug)]
pub enum HarnessError {
    /// The harness configuration failed validation.
    Config(ConfigError),
    /// Writing the report to the output stream failed.
    Io(io::Error),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Io(e) => write!(f, "failed to write timing report: {e}"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ── TimingHarness ──────────────────────────────────────────────────

/// Wall-clock measurement around a single greeter invocation.
///
/// The harness holds a validated [`HarnessConfig`] and a [`Clock`].
/// [`run()`](Self::run) is the whole procedure: read the clock, call the
/// greeter once, read the clock again, write one report line.
///
/// ```
/// use greet_core::GreetingRequest;
/// use greet_harness::{HarnessConfig, TimingHarness};
///
/// let harness = TimingHarness::new(HarnessConfig::default()).unwrap();
/// let mut out = Vec::new();
/// harness.run(&mut out, &GreetingRequest::new("Jack", 5)).unwrap();
/// let line = String::from_utf8(out).unwrap();
/// assert!(line.starts_with("Time: ") && line.ends_with("µs\n"));
/// ```
#[derive(Debug)]
pub struct TimingHarness<C = MonotonicClock> {
    config: HarnessConfig,
    clock: C,
}

impl TimingHarness<MonotonicClock> {
    /// Build a harness over a fresh [`MonotonicClock`].
    pub fn new(config: HarnessConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> TimingHarness<C> {
    /// Build a harness over an explicit clock.
    pub fn with_clock(config: HarnessConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    /// The validated configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The clock readings are taken from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Time one invocation of `f`. Its return value is dropped.
    pub fn measure<T>(&self, f: impl FnOnce() -> T) -> CallMetrics {
        let start_ms = self.clock.now_ms();
        let _ = black_box(f());
        let end_ms = self.clock.now_ms();
        let metrics = CallMetrics { start_ms, end_ms };
        if metrics.is_clock_skewed() {
            eprintln!(
                "greet: clock ran backwards ({start_ms:.6}ms -> {end_ms:.6}ms), reporting zero elapsed"
            );
        }
        metrics
    }

    /// Time one greeter call for `request`. The greeting is discarded.
    pub fn measure_greeting(&self, request: &GreetingRequest) -> CallMetrics {
        self.measure(|| request.evaluate())
    }

    /// Render the report line (without a trailing newline).
    pub fn format_report(&self, metrics: &CallMetrics) -> String {
        let HarnessConfig {
            label,
            scale,
            precision,
            unit,
        } = &self.config;
        let value = metrics.scaled(*scale);
        format!("{label}: {value:.prec$}{unit}", prec = *precision)
    }

    /// Write the report line, newline-terminated, to `out`.
    pub fn emit<W: Write>(&self, out: &mut W, metrics: &CallMetrics) -> Result<(), HarnessError> {
        writeln!(out, "{}", self.format_report(metrics))?;
        out.flush()?;
        Ok(())
    }

    /// Measure one greeter call for `request` and report it to `out`.
    pub fn run<W: Write>(
        &self,
        out: &mut W,
        request: &GreetingRequest,
    ) -> Result<CallMetrics, HarnessError> {
        let metrics = self.measure_greeting(request);
        self.emit(out, &metrics)?;
        Ok(metrics)
    }
}

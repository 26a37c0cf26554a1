//! Timing harness for the greeter.
//!
//! [`TimingHarness`] reads a [`Clock`] before and after a single
//! [`greet`](greet_core::greet) call, then writes one line of the form
//! `Time: <float>µs` to an output stream. Formatting is driven by
//! [`HarnessConfig`]; the raw readings are kept in [`CallMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod harness;
pub mod metrics;

pub use clock::{Clock, MonotonicClock};
pub use config::{ConfigError, HarnessConfig, MAX_PRECISION};
pub use harness::{HarnessError, TimingHarness};
pub use metrics::CallMetrics;

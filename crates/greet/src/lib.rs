//! Greet: a greeter and the timing harness around it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the greet sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use greet::prelude::*;
//!
//! assert_eq!(greet("Jack", 5), "Wait for 0 years");
//! assert_eq!(greet("Jack", 18), "Hello Jack. Welcome in!");
//!
//! let harness = TimingHarness::new(HarnessConfig::default()).unwrap();
//! let mut out = Vec::new();
//! harness.run(&mut out, &GreetingRequest::new("Jack", 5)).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Time: "));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `greet-core` | `GreetingRequest`, `GreetingResult`, `greet` |
//! | [`harness`] | `greet-harness` | `TimingHarness`, clocks, config, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Request and result types and the greeter (`greet-core`).
pub use greet_core as types;

/// Clock, configuration, and timing harness (`greet-harness`).
pub use greet_harness as harness;

/// Common imports for typical greet usage.
pub mod prelude {
    pub use greet_core::{greet, GreetingRequest, GreetingResult, ADULT_AGE};

    pub use greet_harness::{
        CallMetrics, Clock, ConfigError, HarnessConfig, HarnessError, MonotonicClock,
        TimingHarness,
    };
}

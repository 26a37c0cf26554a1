//! Benchmark inputs for the greet workspace.
//!
//! - [`request_mix`]: a deterministic spread of requests across both
//!   greeter branches
//! - [`null_sink`]: an output stream that discards reports

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use greet_core::{GreetingRequest, ADULT_AGE};

/// `n` requests with ages cycling through `0..2 * ADULT_AGE`, so about
/// half land in each branch.
pub fn request_mix(n: usize) -> Vec<GreetingRequest> {
    let span = (2 * ADULT_AGE) as usize;
    (0..n)
        .map(|i| GreetingRequest::new(format!("agent-{i}"), (i % span) as i64))
        .collect()
}

/// Sink for harness reports during benchmarking.
pub fn null_sink() -> std::io::Sink {
    std::io::sink()
}

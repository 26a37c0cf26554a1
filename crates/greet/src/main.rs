//! Time one greeting and print the elapsed time.
//!
//! Takes no arguments. Prints a single `Time: <float>µs` line; the
//! greeting itself is computed and thrown away.

use std::io;

use greet::prelude::*;

fn main() -> anyhow::Result<()> {
    let harness = TimingHarness::new(HarnessConfig::default())?;
    let stdout = io::stdout();
    harness.run(&mut stdout.lock(), &GreetingRequest::new("Jack", 5))?;
    Ok(())
}

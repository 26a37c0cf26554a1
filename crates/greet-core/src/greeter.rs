//! The greeter: a deterministic message from a name and an age.

use crate::request::GreetingResult;

/// Minimum age admitted by the greeter. The comparison is non-strict:
/// an age of exactly 18 is welcomed.
pub const ADULT_AGE: i64 = 18;

/// Waiting period reported to requests below [`ADULT_AGE`].
///
/// Always zero, whatever the requested age. The wait message does not
/// count down towards `ADULT_AGE`.
pub const WAIT_YEARS: i64 = 0;

/// Produce the greeting for `name` at `age`.
///
/// Ages below [`ADULT_AGE`] (negative ones included) get
/// `"Wait for 0 years"` and `name` is ignored. Everything else gets
/// `"Hello <name>. Welcome in!"`. No validation is performed and the
/// call cannot fail.
///
/// ```
/// use greet_core::greet;
///
/// assert_eq!(greet("Jack", 5), "Wait for 0 years");
/// assert_eq!(greet("Jack", 18), "Hello Jack. Welcome in!");
/// ```
pub fn greet(name: &str, age: i64) -> GreetingResult {
    let message = if age < ADULT_AGE {
        format!("Wait for {WAIT_YEARS} years")
    } else {
        format!("Hello {name}. Welcome in!")
    };
    GreetingResult::new(message)
}

//! Standard greeting requests for tests and benchmarks.

use greet_core::GreetingRequest;

/// `("Jack", 5)`: the wait branch.
pub fn minor_request() -> GreetingRequest {
    GreetingRequest::new("Jack", 5)
}

/// `("Jack", 18)`: the lowest age in the welcome branch.
pub fn boundary_request() -> GreetingRequest {
    GreetingRequest::new("Jack", 18)
}

/// `("Jack", 42)`: well inside the welcome branch.
pub fn adult_request() -> GreetingRequest {
    GreetingRequest::new("Jack", 42)
}

/// Paired requests and the greeting each must produce.
pub fn sample_requests() -> Vec<(GreetingRequest, &'static str)> {
    vec![
        (minor_request(), "Wait for 0 years"),
        (boundary_request(), "Hello Jack. Welcome in!"),
        (adult_request(), "Hello Jack. Welcome in!"),
        (GreetingRequest::new("", 0), "Wait for 0 years"),
        (GreetingRequest::new("Jack", 17), "Wait for 0 years"),
        (GreetingRequest::new("Jack", -3), "Wait for 0 years"),
        (GreetingRequest::new("", 18), "Hello . Welcome in!"),
    ]
}

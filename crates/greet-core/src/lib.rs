//! Core types for the greet workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`GreetingRequest`] input, the [`GreetingResult`] output, and the
//! pure [`greet`] function that maps one onto the other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod greeter;
pub mod request;

pub use greeter::{greet, ADULT_AGE, WAIT_YEARS};
pub use request::{GreetingRequest, GreetingResult};

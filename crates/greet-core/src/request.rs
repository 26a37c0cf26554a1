//! Greeting input and output types.

use std::fmt;

use crate::greeter::{greet, ADULT_AGE};

/// A single greeting request: who is asking, and how old they are.
///
/// The age is signed and unchecked. Negative ages are accepted and
/// treated like any other age below [`ADULT_AGE`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GreetingRequest {
    /// Name inserted into the welcome message.
    pub name: String,
    /// Age compared against [`ADULT_AGE`].
    pub age: i64,
}

impl GreetingRequest {
    /// Create a request from a name and an age.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Whether this request falls in the welcome branch.
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Run the greeter over this request.
    pub fn evaluate(&self) -> GreetingResult {
        greet(&self.name, self.age)
    }
}

/// The message produced by the greeter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GreetingResult(String);

impl GreetingResult {
    pub(crate) fn new(message: String) -> Self {
        Self(message)
    }

    /// Borrow the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the result, returning the owned message.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GreetingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GreetingResult {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for GreetingResult {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for GreetingResult {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl From<GreetingResult> for String {
    fn from(r: GreetingResult) -> Self {
        r.0
    }
}

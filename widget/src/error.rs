//! Request failure type.
//!
//! Network errors, rejected requests, and unparseable response bodies all
//! collapse into one kind. The widget never propagates it; it becomes an
//! `Error: <description>` bubble.

use thiserror::Error;

/// A chat request that did not produce a parseable response body.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct RequestFailure {
    description: String,
}

impl RequestFailure {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }

    /// Human-readable description, shown after `Error: ` in the bubble.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<serde_json::Error> for RequestFailure {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

//! Chat endpoint seam.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::RequestFailure;

/// Request body posted to the chat endpoint: `{"message": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Sends one chat request and returns the parsed response body.
///
/// Implementations do not inspect the HTTP status; any body that parses as
/// JSON is returned. Transport errors and unparseable bodies are
/// [`RequestFailure`]s. Futures are not required to be `Send` so browser
/// `fetch` futures qualify.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<Value, RequestFailure>;
}

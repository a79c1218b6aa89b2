//! Chat endpoint client over `fetch`.
//!
//! Browser builds post with `gloo-net`. Native builds (tests, tooling) get a
//! backend that fails every request, since there is no `fetch` to call.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not inspected. Whatever body comes back is parsed as
//! JSON; transport errors and unparseable bodies both become a
//! [`RequestFailure`] whose description is the error's display text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "net_test.rs"]
mod net_test;

use async_trait::async_trait;
use serde_json::Value;
use widget::{ChatBackend, ChatRequest, RequestFailure};

#[cfg(any(test, feature = "browser"))]
fn request_failure(err: impl std::fmt::Display) -> RequestFailure {
    RequestFailure::new(err.to_string())
}

/// Posts chat turns to a same-origin endpoint.
pub struct FetchBackend {
    endpoint: String,
}

impl FetchBackend {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatBackend for FetchBackend {
    #[cfg(feature = "browser")]
    async fn send(&self, request: &ChatRequest) -> Result<Value, RequestFailure> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .json(request)
            .map_err(request_failure)?
            .send()
            .await
            .map_err(request_failure)?;
        resp.json::<Value>().await.map_err(request_failure)
    }

    #[cfg(not(feature = "browser"))]
    async fn send(&self, _request: &ChatRequest) -> Result<Value, RequestFailure> {
        Err(RequestFailure::new("fetch is not available outside the browser"))
    }
}

//! Chat backend over `reqwest`.
//!
//! Mirrors what the browser does with `fetch`: post `{"message": ...}`,
//! ignore the status, parse whatever body comes back as JSON.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use serde_json::Value;
use widget::{ChatBackend, ChatRequest, RequestFailure};

/// Join a base URL and an absolute path. `None` if the base is not http(s).
pub fn endpoint_url(base_url: &str, path: &str) -> Option<String> {
    let base = base_url.trim().trim_end_matches('/');
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return None;
    }
    Some(format!("{base}/{}", path.trim_start_matches('/')))
}

pub struct HttpBackend {
    http: reqwest::Client,
    url: String,
}

impl HttpBackend {
    /// Build a backend with no request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, url })
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<Value, RequestFailure> {
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestFailure::new(e.to_string()))?;
        tracing::debug!(status = response.status().as_u16(), url = %self.url, "chat response received");
        let text = response
            .text()
            .await
            .map_err(|e| RequestFailure::new(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

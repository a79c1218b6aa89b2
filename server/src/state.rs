//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no conversation state; it only holds the optional forward to
//! the external chat backend.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::HeaderValue;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use crate::config::HostConfig;
use crate::error::HostError;

/// Relays chat requests to the upstream backend unchanged.
pub struct ChatForward {
    http: reqwest::Client,
    url: String,
}

impl ChatForward {
    /// Build a forward without a request timeout; a slow upstream is waited on.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self, HostError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post `body` upstream and mirror its status, content type, and body.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the upstream cannot be reached or its
    /// body cannot be read.
    pub async fn relay(&self, content_type: Option<&HeaderValue>, body: Bytes) -> Result<Response, reqwest::Error> {
        let mut request = self.http.post(&self.url).body(body);
        if let Some(ct) = content_type {
            request = request.header(CONTENT_TYPE, ct);
        }
        let upstream = request.send().await?;
        let status = upstream.status();
        let upstream_type = upstream.headers().get(CONTENT_TYPE).cloned();
        let bytes = upstream.bytes().await?;

        let mut response = (status, bytes).into_response();
        if let Some(ct) = upstream_type {
            response.headers_mut().insert(CONTENT_TYPE, ct);
        }
        Ok(response)
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when `CHAT_BACKEND_URL` is not configured.
    pub forward: Option<Arc<ChatForward>>,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the forwarding client cannot be constructed.
    pub fn from_config(config: &HostConfig) -> Result<Self, HostError> {
        let forward = match config.backend_url.as_deref() {
            Some(url) => Some(Arc::new(ChatForward::new(url)?)),
            None => None,
        };
        Ok(Self { forward })
    }
}

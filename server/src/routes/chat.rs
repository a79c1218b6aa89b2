//! `POST /api/chat` relay.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

/// Forward the request body to the configured chat backend.
///
/// Upstream status and body pass through untouched. An unconfigured or
/// unreachable upstream answers `502` with `{"error": "..."}`.
pub async fn relay_chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(forward) = state.forward.as_ref() else {
        return bad_gateway("chat backend not configured".to_owned());
    };

    match forward.relay(headers.get(CONTENT_TYPE), body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, upstream = forward.url(), "chat relay failed");
            bad_gateway(format!("chat backend unreachable: {e}"))
        }
    }
}

fn bad_gateway(message: String) -> Response {
    (StatusCode::BAD_GATEWAY, Json(json!({ "error": message }))).into_response()
}

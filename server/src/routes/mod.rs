//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the host page at `/`, the compiled front end under `/pkg`, a health
//! check, and the chat endpoint the widget posts to. Reply generation is
//! external; `/api/chat` only relays.

pub mod chat;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::page;
use crate::state::AppState;

/// Full router: page, assets, health, and chat relay.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/chat", post(chat::relay_chat))
        .nest_service("/pkg", ServeDir::new(site_dir.join("pkg")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::index_html())
}

async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true, "ts_ms": now_ms() }))
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

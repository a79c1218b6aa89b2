use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::state::ChatForward;

// =============================================================
// Helpers
// =============================================================

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn chat_request(body: &str) -> Request<Body> {
    Request::post("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

/// Fake upstream: echoes `message` as the reply, or answers 400 when it is blank.
async fn spawn_upstream() -> String {
    async fn upstream_chat(Json(payload): Json<Value>) -> axum::response::Response {
        use axum::response::IntoResponse;
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_owned();
        if message.is_empty() {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "message is required" }))).into_response();
        }
        Json(json!({ "reply": format!("<b>{message}</b>") })).into_response()
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route("/api/chat", post(upstream_chat));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api/chat")
}

fn state_forwarding_to(url: &str) -> AppState {
    AppState { forward: Some(Arc::new(ChatForward::new(url).unwrap())) }
}

// =============================================================
// Page and health
// =============================================================

#[tokio::test]
async fn index_serves_widget_page() {
    let app = app(AppState::default(), Path::new("site"));
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"id="chat""#));
    assert!(html.contains(r#"id="prompt""#));
    assert!(html.contains(r#"id="send""#));
}

#[tokio::test]
async fn healthz_reports_ok_with_timestamp() {
    let app = app(AppState::default(), Path::new("site"));
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ok"], json!(true));
    assert!(body["ts_ms"].as_u64().is_some_and(|ts| ts > 0));
}

#[tokio::test]
async fn pkg_assets_are_served_from_site_dir() {
    let site = tempfile::tempdir().unwrap();
    std::fs::create_dir(site.path().join("pkg")).unwrap();
    std::fs::write(site.path().join("pkg").join("web.js"), "export default function init() {}").unwrap();

    let app = app(AppState::default(), site.path());
    let response = app
        .oneshot(Request::get("/pkg/web.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"export default function init() {}");
}

// =============================================================
// Chat relay
// =============================================================

#[tokio::test]
async fn chat_without_backend_is_bad_gateway() {
    let app = app(AppState::default(), Path::new("site"));
    let response = app.oneshot(chat_request(r#"{"message":"hi"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await, json!({ "error": "chat backend not configured" }));
}

#[tokio::test]
async fn chat_relays_upstream_reply() {
    let url = spawn_upstream().await;
    let app = app(state_forwarding_to(&url), Path::new("site"));

    let response = app.oneshot(chat_request(r#"{"message":"hello"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "reply": "<b>hello</b>" }));
}

#[tokio::test]
async fn chat_passes_upstream_status_through() {
    let url = spawn_upstream().await;
    let app = app(state_forwarding_to(&url), Path::new("site"));

    let response = app.oneshot(chat_request(r#"{"message":"  "}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "message is required" }));
}

#[tokio::test]
async fn chat_with_unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = app(state_forwarding_to(&format!("http://{addr}/api/chat")), Path::new("site"));
    let response = app.oneshot(chat_request(r#"{"message":"hi"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some_and(|e| e.starts_with("chat backend unreachable")));
}

use super::*;

#[test]
fn request_failure_uses_display_text() {
    let failure = request_failure("TypeError: Failed to fetch");
    assert_eq!(failure.description(), "TypeError: Failed to fetch");
}

#[test]
fn request_failure_from_json_error() {
    let err = serde_json::from_str::<Value>("<html>").unwrap_err();
    let failure = request_failure(&err);
    assert!(failure.description().contains("expected value"));
}

#[test]
fn endpoint_is_kept() {
    assert_eq!(FetchBackend::new("/api/chat").endpoint(), "/api/chat");
}

#[cfg(not(feature = "browser"))]
#[tokio::test]
async fn native_backend_fails_every_request() {
    let backend = FetchBackend::new("/api/chat");
    let err = backend.send(&ChatRequest::new("hi")).await.unwrap_err();
    assert_eq!(err.description(), "fetch is not available outside the browser");
}

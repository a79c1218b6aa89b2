use super::*;

// =============================================================
// Message constructors
// =============================================================

#[test]
fn user_message_is_plain() {
    let msg = Message::user("<b>x</b>");
    assert_eq!(msg.role(), Role::User);
    assert_eq!(msg.text(), "<b>x</b>");
    assert_eq!(msg.render_mode(), RenderMode::Plain);
}

#[test]
fn assistant_reply_is_raw_html() {
    let msg = Message::assistant_reply("<img src=x onerror=alert(1)>");
    assert_eq!(msg.role(), Role::Assistant);
    assert_eq!(msg.render_mode(), RenderMode::RawHtml);
}

#[test]
fn assistant_error_is_plain_and_prefixed() {
    let msg = Message::assistant_error(&RequestFailure::new("TypeError: failed"));
    assert_eq!(msg.role(), Role::Assistant);
    assert_eq!(msg.text(), "Error: TypeError: failed");
    assert_eq!(msg.render_mode(), RenderMode::Plain);
}

#[test]
fn role_css_names() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Assistant.as_str(), "assistant");
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_starts_empty() {
    let transcript = Transcript::new();
    assert!(transcript.is_empty());
    assert_eq!(transcript.len(), 0);
    assert!(transcript.last().is_none());
}

#[test]
fn transcript_preserves_append_order() {
    let mut transcript = Transcript::new();
    transcript.push(Message::user("one"));
    transcript.push(Message::assistant_reply("two"));
    transcript.push(Message::user("three"));

    let texts: Vec<&str> = transcript.iter().map(Message::text).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    assert_eq!(transcript.get(1).map(Message::role), Some(Role::Assistant));
    assert_eq!(transcript.last().map(Message::text), Some("three"));
}

#[test]
fn transcript_serializes_as_array() {
    let mut transcript = Transcript::new();
    transcript.push(Message::user("hi"));
    transcript.push(Message::assistant_reply("<i>yo</i>"));

    let json = serde_json::to_value(&transcript).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "role": "user", "text": "hi", "render_mode": "plain" },
            { "role": "assistant", "text": "<i>yo</i>", "render_mode": "raw_html" },
        ])
    );
}

use super::*;
use crate::error::RequestFailure;

// =============================================================
// escape_text
// =============================================================

#[test]
fn escape_text_covers_markup_characters() {
    assert_eq!(escape_text("<a>Tom & Jerry</a>"), "&lt;a&gt;Tom &amp; Jerry&lt;/a&gt;");
}

#[test]
fn escape_text_keeps_quotes_like_a_text_node() {
    assert_eq!(escape_text(r#"a"b 'c'"#), r#"a"b 'c'"#);
    assert_eq!(bubble_content(&Message::user(r#"say "hi" & <go>"#)), r#"say "hi" &amp; &lt;go&gt;"#);
}

#[test]
fn escape_text_leaves_plain_text_alone() {
    assert_eq!(escape_text("hello, world\nsecond line"), "hello, world\nsecond line");
}

// =============================================================
// Render modes
// =============================================================

#[test]
fn user_markup_is_shown_literally() {
    let msg = Message::user("<b>x</b>");
    assert_eq!(bubble_content(&msg), "&lt;b&gt;x&lt;/b&gt;");
    assert_eq!(message_html(&msg), r#"<div class="msg user"><div class="bubble">&lt;b&gt;x&lt;/b&gt;</div></div>"#);
}

#[test]
fn assistant_reply_markup_is_embedded_unescaped() {
    let msg = Message::assistant_reply("<img src=x onerror=alert(1)>");
    assert_eq!(
        message_html(&msg),
        r#"<div class="msg assistant"><div class="bubble"><img src=x onerror=alert(1)></div></div>"#
    );
}

#[test]
fn assistant_error_is_escaped() {
    let msg = Message::assistant_error(&RequestFailure::new("<script>bad</script>"));
    assert_eq!(bubble_content(&msg), "Error: &lt;script&gt;bad&lt;/script&gt;");
}

#[test]
fn bubble_write_follows_render_mode() {
    assert_eq!(bubble_write(&Message::user("<b>x</b>")), BubbleWrite::Text("<b>x</b>"));
    assert_eq!(bubble_write(&Message::assistant_reply("<b>x</b>")), BubbleWrite::Markup("<b>x</b>"));
    let failure = Message::assistant_error(&RequestFailure::new("<i>down</i>"));
    assert_eq!(bubble_write(&failure), BubbleWrite::Text("Error: <i>down</i>"));
}

#[test]
fn row_class_includes_role() {
    assert_eq!(row_class(&Message::user("a")), "msg user");
    assert_eq!(row_class(&Message::assistant_reply("a")), "msg assistant");
}

// =============================================================
// transcript_html
// =============================================================

#[test]
fn transcript_html_is_ordered() {
    let mut transcript = Transcript::new();
    transcript.push(Message::user("q"));
    transcript.push(Message::assistant_reply("<p>a</p>"));

    let html = transcript_html(&transcript);
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("msg user"));
    assert!(lines[1].contains("<p>a</p>"));
}

#[test]
fn empty_transcript_renders_nothing() {
    assert_eq!(transcript_html(&Transcript::new()), "");
}

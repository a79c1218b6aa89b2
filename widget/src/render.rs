//! Markup snapshot renderer.
//!
//! Produces the same element structure the browser front end builds with DOM
//! calls: one `<div class="msg {role}">` row per message wrapping a
//! `<div class="bubble">`. Plain messages are escaped the way a browser
//! serializes a text node (`&`, `<`, `>` only). Raw-HTML messages are embedded
//! verbatim.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::message::{Message, RenderMode, Transcript};

/// Class applied to every message row, followed by the role.
pub const ROW_CLASS: &str = "msg";
/// Class applied to the inner bubble.
pub const BUBBLE_CLASS: &str = "bubble";

/// Space-separated class list for a message row (`msg user`).
#[must_use]
pub fn row_class(message: &Message) -> String {
    format!("{ROW_CLASS} {}", message.role().as_str())
}

/// How a bubble's content is written into the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleWrite<'a> {
    /// Set as a text node (`textContent`); markup shows literally.
    Text(&'a str),
    /// Parsed as markup (`innerHTML`).
    Markup(&'a str),
}

/// The write a front end must perform for this message's bubble.
#[must_use]
pub fn bubble_write(message: &Message) -> BubbleWrite<'_> {
    match message.render_mode() {
        RenderMode::Plain => BubbleWrite::Text(message.text()),
        RenderMode::RawHtml => BubbleWrite::Markup(message.text()),
    }
}

/// Bubble content as it ends up in the document.
#[must_use]
pub fn bubble_content(message: &Message) -> String {
    match bubble_write(message) {
        BubbleWrite::Text(text) => escape_text(text),
        BubbleWrite::Markup(html) => html.to_owned(),
    }
}

/// One message row.
#[must_use]
pub fn message_html(message: &Message) -> String {
    format!(
        r#"<div class="{}"><div class="{BUBBLE_CLASS}">{}</div></div>"#,
        row_class(message),
        bubble_content(message)
    )
}

/// All rows, newline separated, in transcript order.
#[must_use]
pub fn transcript_html(transcript: &Transcript) -> String {
    transcript
        .iter()
        .map(message_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text the way a browser serializes a text node. Quotes stay literal.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

//! Chat message model and the append-only transcript.
//!
//! DESIGN
//! ======
//! The render mode is part of the message itself rather than a flag passed to
//! the renderer. Whether a bubble is inserted as literal text or as markup is
//! therefore decided once, when the message is created, and every renderer
//! has to branch on it.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::Serialize;

use crate::error::RequestFailure;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS class suffix used for the message row (`msg user`, `msg assistant`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// How a message's text is inserted into the transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Literal text. Markup in the content is shown, never interpreted.
    Plain,
    /// Interpreted as markup, unescaped. Only assistant replies use this.
    RawHtml,
}

/// A single transcript entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    text: String,
    render_mode: RenderMode,
}

impl Message {
    /// A user turn. Always rendered as plain text.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into(), render_mode: RenderMode::Plain }
    }

    /// A successful assistant reply. Rendered as raw markup.
    #[must_use]
    pub fn assistant_reply(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, text: text.into(), render_mode: RenderMode::RawHtml }
    }

    /// An assistant bubble describing a failed request. Rendered as plain text.
    #[must_use]
    pub fn assistant_error(failure: &RequestFailure) -> Self {
        Self { role: Role::Assistant, text: format!("Error: {failure}"), render_mode: RenderMode::Plain }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }
}

/// Ordered, append-only record of the conversation for one page session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end. There is no way to remove or edit one.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

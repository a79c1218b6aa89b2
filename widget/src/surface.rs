//! UI surfaces the widget drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser front end implements these over three DOM elements; the
//! terminal front end implements them over stdout and a line buffer; tests
//! implement them with recording fakes. Methods take `&self` because surfaces
//! are shared with event listeners and wrap handles that are already
//! reference-like (DOM nodes) or use interior mutability.

use crate::message::Message;

/// The visible transcript container.
pub trait TranscriptView {
    /// Render one message at the end of the container, honoring its render mode.
    fn append(&self, message: &Message);

    /// Scroll so the most recent message is visible (scroll top = full scroll height).
    fn scroll_to_latest(&self);
}

/// The text field the user types into.
pub trait PromptInput {
    fn value(&self) -> String;
    fn clear(&self);
    fn focus(&self);
}

/// The control that starts a submission.
pub trait SendTrigger {
    fn set_enabled(&self, enabled: bool);
}

/// The three surfaces a widget is bound to.
pub struct Surfaces {
    pub transcript: Box<dyn TranscriptView>,
    pub input: Box<dyn PromptInput>,
    pub trigger: Box<dyn SendTrigger>,
}

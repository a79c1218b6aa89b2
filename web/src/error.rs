//! Mount errors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Reasons the widget could not be bound to the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    MissingWindow,

    /// The window has no document.
    #[error("no document available")]
    MissingDocument,

    /// No element carries the expected id.
    #[error("element #{id} not found")]
    MissingElement { id: String },

    /// The element exists but is not the kind the widget needs.
    #[error("element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },

    /// Registering an event listener was rejected by the browser.
    #[error("failed to attach {event} listener: {detail}")]
    Listener { event: &'static str, detail: String },
}

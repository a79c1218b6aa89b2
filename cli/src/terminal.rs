//! Terminal surfaces for the widget.
//!
//! A terminal cannot interpret markup, so in text mode every bubble is printed
//! as-is behind a role prefix. `--html` mode prints the markup snapshot
//! instead, where the render mode is visible: plain bubbles come out escaped,
//! raw-HTML replies verbatim. `--json` prints nothing per message and dumps
//! the whole transcript when the session ends.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use widget::render::message_html;
use widget::{Message, PromptInput, Role, SendTrigger, SubmitOutcome, Transcript, TranscriptView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

/// One output line for a message, or `None` when output is deferred.
pub fn format_message(message: &Message, format: OutputFormat) -> Option<String> {
    let line = match format {
        OutputFormat::Text => {
            let prefix = match message.role() {
                Role::User => "you",
                Role::Assistant => "bot",
            };
            format!("{prefix}> {}", message.text())
        }
        OutputFormat::Html => message_html(message),
        OutputFormat::Json => return None,
    };
    Some(line)
}

/// The transcript as a JSON array of `{role, text, render_mode}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn transcript_json(transcript: &Transcript) -> Result<String, serde_json::Error> {
    serde_json::to_string(transcript)
}

/// Stderr line for a round trip that exceeded the slow threshold.
pub fn slow_notice(outcome: SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Replied(trip) | SubmitOutcome::Failed(trip) if trip.slow => {
            Some(format!("slow response: {:.0} ms", trip.elapsed_ms))
        }
        _ => None,
    }
}

pub struct TerminalTranscript<W: Write> {
    out: RefCell<W>,
    format: OutputFormat,
}

impl<W: Write> TerminalTranscript<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out: RefCell::new(out), format }
    }
}

impl<W: Write> TranscriptView for TerminalTranscript<W> {
    fn append(&self, message: &Message) {
        let Some(line) = format_message(message, self.format) else {
            return;
        };
        if let Err(e) = writeln!(self.out.borrow_mut(), "{line}") {
            tracing::warn!(error = %e, "transcript write failed");
        }
    }

    fn scroll_to_latest(&self) {
        if let Err(e) = self.out.borrow_mut().flush() {
            tracing::warn!(error = %e, "transcript flush failed");
        }
    }
}

/// The current stdin line, shared with the read loop.
pub struct LineInput {
    line: Rc<RefCell<String>>,
}

impl LineInput {
    pub fn new(line: Rc<RefCell<String>>) -> Self {
        Self { line }
    }
}

impl PromptInput for LineInput {
    fn value(&self) -> String {
        self.line.borrow().clone()
    }

    fn clear(&self) {
        self.line.borrow_mut().clear();
    }

    fn focus(&self) {}
}

/// Nothing to disable in a terminal; the state change is traced.
pub struct StatusTrigger;

impl SendTrigger for StatusTrigger {
    fn set_enabled(&self, enabled: bool) {
        tracing::trace!(enabled, "send trigger");
    }
}

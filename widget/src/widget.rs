//! The chat widget controller.
//!
//! DESIGN
//! ======
//! `submit` is an async task that runs on the UI event loop. The backend call
//! is its only suspension point. While a request is outstanding the send
//! trigger is disabled and further submissions are refused, so at most one
//! request is ever in flight. The disable/enable pair is owned by a scope
//! guard, which re-enables the trigger on every exit path, including the
//! future being dropped before the response arrives.
//!
//! State lives behind `Cell`/`RefCell` so the widget can be shared (`Rc`)
//! with event listeners. No borrow is held across the await.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::cell::{Cell, RefCell};

use crate::backend::{ChatBackend, ChatRequest};
use crate::clock::{self, Clock};
use crate::config::WidgetConfig;
use crate::message::{Message, Transcript};
use crate::reply::reply_text;
use crate::surface::{SendTrigger, Surfaces};

/// Timing of a settled request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundTrip {
    pub elapsed_ms: f64,
    /// Elapsed time exceeded the configured slow-response threshold.
    pub slow: bool,
}

/// What a call to [`ChatWidget::submit`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// Another request is still in flight; nothing happened.
    Busy,
    /// The backend answered and the reply was appended.
    Replied(RoundTrip),
    /// The request failed and an error bubble was appended.
    Failed(RoundTrip),
}

/// Chat widget bound to its surfaces and backend for one page session.
pub struct ChatWidget {
    config: WidgetConfig,
    backend: Box<dyn ChatBackend>,
    surfaces: Surfaces,
    transcript: RefCell<Transcript>,
    sending: Cell<bool>,
    clock: Clock,
}

impl ChatWidget {
    #[must_use]
    pub fn new(config: WidgetConfig, backend: Box<dyn ChatBackend>, surfaces: Surfaces) -> Self {
        Self {
            config,
            backend,
            surfaces,
            transcript: RefCell::new(Transcript::new()),
            sending: Cell::new(false),
            clock: clock::now_ms,
        }
    }

    /// Replace the clock used to time round trips.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Snapshot of the transcript so far.
    #[must_use]
    pub fn transcript(&self) -> Transcript {
        self.transcript.borrow().clone()
    }

    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending.get()
    }

    /// Submit whatever the prompt field currently holds.
    pub async fn submit_from_input(&self) -> SubmitOutcome {
        let raw = self.surfaces.input.value();
        self.submit(&raw).await
    }

    /// Submit one user turn and wait for the reply.
    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        let text = raw_input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.sending.get() {
            log::debug!("submit ignored: request already in flight");
            return SubmitOutcome::Busy;
        }

        self.append(Message::user(text));
        self.surfaces.input.clear();
        self.surfaces.input.focus();

        let gate = SendGate::acquire(&self.sending, self.surfaces.trigger.as_ref());
        let started_ms = (self.clock)();
        let request = ChatRequest::new(text);
        log::debug!("chat request dispatched to {} ({} chars)", self.config.endpoint, text.len());

        let replied = match self.backend.send(&request).await {
            Ok(body) => {
                let reply = reply_text(&body, &self.config.no_reply_placeholder);
                self.append(Message::assistant_reply(reply));
                true
            }
            Err(failure) => {
                log::warn!("chat request failed: {failure}");
                self.append(Message::assistant_error(&failure));
                false
            }
        };
        drop(gate);

        let elapsed_ms = ((self.clock)() - started_ms).max(0.0);
        let slow = elapsed_ms > self.config.slow_response_ms;
        if slow {
            log::debug!("slow response: {elapsed_ms:.0} ms");
        }

        let round_trip = RoundTrip { elapsed_ms, slow };
        if replied { SubmitOutcome::Replied(round_trip) } else { SubmitOutcome::Failed(round_trip) }
    }

    fn append(&self, message: Message) {
        self.surfaces.transcript.append(&message);
        self.surfaces.transcript.scroll_to_latest();
        self.transcript.borrow_mut().push(message);
    }
}

/// Holds the send trigger disabled for as long as it lives.
struct SendGate<'a> {
    sending: &'a Cell<bool>,
    trigger: &'a dyn SendTrigger,
}

impl<'a> SendGate<'a> {
    fn acquire(sending: &'a Cell<bool>, trigger: &'a dyn SendTrigger) -> Self {
        sending.set(true);
        trigger.set_enabled(false);
        Self { sending, trigger }
    }
}

impl Drop for SendGate<'_> {
    fn drop(&mut self) {
        self.sending.set(false);
        self.trigger.set_enabled(true);
    }
}

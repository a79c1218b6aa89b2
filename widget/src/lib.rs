//! Platform-neutral core of the chat widget.
//!
//! The widget keeps an append-only transcript, relays each user turn to a
//! remote chat endpoint, and renders the reply. Everything that touches the
//! browser (DOM elements, `fetch`) sits behind the traits in [`surface`] and
//! [`backend`], so the controller can be exercised natively in tests and
//! reused by the terminal front end.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | The [`ChatWidget`] controller and its single-flight gate |
//! | [`message`] | [`Message`], [`Role`], [`RenderMode`], and the [`Transcript`] |
//! | [`surface`] | Injected UI surfaces: transcript view, prompt input, send trigger |
//! | [`backend`] | The [`ChatBackend`] seam and the request wire type |
//! | [`reply`] | Reply extraction from the response body |
//! | [`render`] | Markup snapshot renderer honoring each message's render mode |
//! | [`keys`] | Keyboard submit contract |
//! | [`config`] | [`WidgetConfig`] defaults |
//! | [`error`] | [`RequestFailure`] |
//! | [`clock`] | Millisecond clock used for round-trip diagnostics |

pub mod backend;
pub mod clock;
pub mod config;
pub mod error;
pub mod keys;
pub mod message;
pub mod render;
pub mod reply;
pub mod surface;
pub mod widget;

pub use backend::{ChatBackend, ChatRequest};
pub use config::WidgetConfig;
pub use error::RequestFailure;
pub use message::{Message, RenderMode, Role, Transcript};
pub use surface::{PromptInput, SendTrigger, Surfaces, TranscriptView};
pub use widget::{ChatWidget, RoundTrip, SubmitOutcome};

//! Widget configuration.
//!
//! The widget reads no environment or files; hosts construct a
//! [`WidgetConfig`] (usually [`WidgetConfig::default`]) and hand it in.

/// Endpoint the widget posts to.
pub const DEFAULT_ENDPOINT: &str = "/api/chat";
/// Id of the transcript container element.
pub const DEFAULT_TRANSCRIPT_ID: &str = "chat";
/// Id of the text field.
pub const DEFAULT_PROMPT_ID: &str = "prompt";
/// Id of the send button.
pub const DEFAULT_TRIGGER_ID: &str = "send";
/// Shown when the response carries no usable `reply`.
pub const NO_REPLY_PLACEHOLDER: &str = "(no reply)";
/// Round trips slower than this are logged at debug level.
pub const DEFAULT_SLOW_RESPONSE_MS: f64 = 1500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub endpoint: String,
    pub transcript_id: String,
    pub prompt_id: String,
    pub trigger_id: String,
    pub no_reply_placeholder: String,
    pub slow_response_ms: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            transcript_id: DEFAULT_TRANSCRIPT_ID.to_owned(),
            prompt_id: DEFAULT_PROMPT_ID.to_owned(),
            trigger_id: DEFAULT_TRIGGER_ID.to_owned(),
            no_reply_placeholder: NO_REPLY_PLACEHOLDER.to_owned(),
            slow_response_ms: DEFAULT_SLOW_RESPONSE_MS,
        }
    }
}

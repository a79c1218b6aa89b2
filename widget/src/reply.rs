//! Reply extraction from a chat response body.
//!
//! The endpoint is expected to answer `{"reply": "<text>"}`. Anything else
//! falls back to a placeholder. Falsy replies (`null`, `false`, `0`, `""`)
//! count as missing, the same test a browser applies with `reply || fallback`.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use serde_json::Value;

/// Field holding the assistant's text in the response body.
pub const REPLY_FIELD: &str = "reply";

/// Pull the display text out of a parsed response body.
///
/// Non-string replies are stringified: numbers and `true` use their literal
/// form, arrays and objects their compact JSON form.
#[must_use]
pub fn reply_text(body: &Value, placeholder: &str) -> String {
    let Some(reply) = body.get(REPLY_FIELD) else {
        return placeholder.to_owned();
    };
    if !is_truthy(reply) {
        return placeholder.to_owned();
    }
    match reply {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

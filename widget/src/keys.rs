//! Keyboard submit contract.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Key name (as reported by `KeyboardEvent.key`) that submits the prompt.
pub const SUBMIT_KEY: &str = "Enter";

/// Whether a keydown should submit the prompt.
///
/// Enter alone submits. Shift+Enter is left to the field so it inserts a line
/// break.
#[must_use]
pub fn is_submit_chord(key: &str, shift: bool) -> bool {
    key == SUBMIT_KEY && !shift
}

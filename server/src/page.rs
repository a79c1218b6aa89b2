//! The page that hosts the widget.
//!
//! Carries the three elements the front end binds to by id, and loads the
//! wasm-bindgen glue from `/pkg`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use widget::config::{DEFAULT_PROMPT_ID, DEFAULT_TRANSCRIPT_ID, DEFAULT_TRIGGER_ID};

pub const PAGE_TITLE: &str = "Chat";
/// Glue module emitted by `wasm-bindgen --target web` for the `web` crate.
pub const SCRIPT_PATH: &str = "/pkg/web.js";

const STYLE: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; background: #f4f4f5; }
.app { max-width: 720px; margin: 0 auto; height: 100vh; display: flex; flex-direction: column; }
.chat { flex: 1; overflow-y: auto; padding: 16px; }
.msg { display: flex; margin: 8px 0; }
.msg.user { justify-content: flex-end; }
.bubble { max-width: 80%; padding: 8px 12px; border-radius: 12px; white-space: pre-wrap; }
.msg.user .bubble { background: #2563eb; color: #fff; }
.msg.assistant .bubble { background: #fff; border: 1px solid #e4e4e7; }
.composer { display: flex; gap: 8px; padding: 12px 16px; border-top: 1px solid #e4e4e7; }
.composer textarea { flex: 1; resize: none; font: inherit; padding: 8px; }
.composer button:disabled { opacity: 0.5; }
";

/// Render the host page.
#[must_use]
pub fn index_html() -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<main class="app">
<div id="{DEFAULT_TRANSCRIPT_ID}" class="chat"></div>
<div class="composer">
<textarea id="{DEFAULT_PROMPT_ID}" rows="2" placeholder="Type a message"></textarea>
<button id="{DEFAULT_TRIGGER_ID}" type="button">Send</button>
</div>
</main>
<script type="module">import init from "{SCRIPT_PATH}"; init();</script>
</body>
</html>
"#
    )
}

//! # web
//!
//! WebAssembly front end for the chat widget. Binds the platform-neutral
//! [`widget::ChatWidget`] to three elements already present in the page
//! (`#chat`, `#prompt`, `#send`), posts turns with `fetch`, and wires the
//! click and keyboard listeners.
//!
//! Browser code is compiled only with the `browser` feature; without it the
//! crate still builds natively so its pure parts can be tested.

pub mod error;
#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod mount;
pub mod net;

pub use error::BindError;

/// Entry point run by the generated JS glue once the module is instantiated.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }

    match mount::mount(widget::WidgetConfig::default()) {
        Ok(_) => log::info!("chat widget mounted"),
        Err(e) => log::error!("chat widget not mounted: {e}"),
    }
}

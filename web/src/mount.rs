//! Mounts the widget on the current page and wires its listeners.
//!
//! Listeners are leaked (`Closure::forget`) on purpose: the widget lives for
//! the whole page session and is torn down with the document on navigation.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::{Closure, WasmClosure};
use web_sys::{Event, EventTarget, KeyboardEvent};
use widget::keys::is_submit_chord;
use widget::{ChatWidget, WidgetConfig};

use crate::dom;
use crate::error::BindError;
use crate::net::FetchBackend;

/// Bind to the page's elements and start handling clicks and Enter.
///
/// # Errors
///
/// Returns [`BindError`] if the document or any of the three elements is
/// missing, or if the browser rejects a listener.
pub fn mount(config: WidgetConfig) -> Result<Rc<ChatWidget>, BindError> {
    let window = web_sys::window().ok_or(BindError::MissingWindow)?;
    let document = window.document().ok_or(BindError::MissingDocument)?;
    let bound = dom::bind(&document, &config)?;

    let backend = FetchBackend::new(config.endpoint.clone());
    let widget = Rc::new(ChatWidget::new(config, Box::new(backend), bound.surfaces(&document)));

    let on_click = {
        let widget = Rc::clone(&widget);
        Closure::<dyn FnMut(Event)>::new(move |_ev: Event| spawn_submit(&widget))
    };
    listen(&bound.button, "click", on_click)?;

    let on_keydown = {
        let widget = Rc::clone(&widget);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if is_submit_chord(&ev.key(), ev.shift_key()) {
                ev.prevent_default();
                spawn_submit(&widget);
            }
        })
    };
    listen(bound.prompt.target(), "keydown", on_keydown)?;

    Ok(widget)
}

fn spawn_submit(widget: &Rc<ChatWidget>) {
    let widget = Rc::clone(widget);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = widget.submit_from_input().await;
        log::trace!("submit settled: {outcome:?}");
    });
}

fn listen<T: ?Sized + WasmClosure>(target: &EventTarget, event: &'static str, handler: Closure<T>) -> Result<(), BindError> {
    target
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener { event, detail: format!("{e:?}") })?;
    handler.forget();
    Ok(())
}

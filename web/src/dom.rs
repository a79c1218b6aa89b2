//! DOM-backed widget surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships three elements with stable ids. They are looked up once at
//! mount time and wrapped here; the widget never touches the document
//! directly. The transcript renderer is where the render mode takes effect:
//! plain messages go through `textContent`, raw-HTML replies through
//! `innerHTML`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use widget::render::{BUBBLE_CLASS, BubbleWrite, bubble_write, row_class};
use widget::{Message, PromptInput, SendTrigger, Surfaces, TranscriptView, WidgetConfig};

use crate::error::BindError;

/// Transcript container (`#chat`).
pub struct DomTranscript {
    document: Document,
    container: HtmlElement,
}

impl TranscriptView for DomTranscript {
    fn append(&self, message: &Message) {
        let (Ok(row), Ok(bubble)) = (self.document.create_element("div"), self.document.create_element("div")) else {
            log::error!("failed to create message elements");
            return;
        };
        row.set_class_name(&row_class(message));
        bubble.set_class_name(BUBBLE_CLASS);
        match bubble_write(message) {
            BubbleWrite::Text(text) => bubble.set_text_content(Some(text)),
            BubbleWrite::Markup(html) => bubble.set_inner_html(html),
        }
        if row.append_child(&bubble).is_err() || self.container.append_child(&row).is_err() {
            log::error!("failed to append message row");
        }
    }

    fn scroll_to_latest(&self) {
        self.container.set_scroll_top(self.container.scroll_height());
    }
}

/// Text field (`#prompt`). Multi-line pages use a `<textarea>`.
#[derive(Clone)]
pub enum PromptField {
    TextArea(HtmlTextAreaElement),
    Input(HtmlInputElement),
}

impl PromptField {
    fn element(&self) -> &HtmlElement {
        match self {
            Self::TextArea(el) => el,
            Self::Input(el) => el,
        }
    }

    /// The field as a listener target.
    #[must_use]
    pub fn target(&self) -> &EventTarget {
        self.element()
    }
}

impl PromptInput for PromptField {
    fn value(&self) -> String {
        match self {
            Self::TextArea(el) => el.value(),
            Self::Input(el) => el.value(),
        }
    }

    fn clear(&self) {
        match self {
            Self::TextArea(el) => el.set_value(""),
            Self::Input(el) => el.set_value(""),
        }
    }

    fn focus(&self) {
        if self.element().focus().is_err() {
            log::debug!("prompt focus rejected");
        }
    }
}

/// Send button (`#send`).
#[derive(Clone)]
pub struct DomTrigger {
    button: HtmlButtonElement,
}

impl SendTrigger for DomTrigger {
    fn set_enabled(&self, enabled: bool) {
        self.button.set_disabled(!enabled);
    }
}

/// The three elements the widget is bound to.
pub struct BoundElements {
    pub container: HtmlElement,
    pub prompt: PromptField,
    pub button: HtmlButtonElement,
}

impl BoundElements {
    /// Wrap the elements as widget surfaces.
    #[must_use]
    pub fn surfaces(&self, document: &Document) -> Surfaces {
        Surfaces {
            transcript: Box::new(DomTranscript { document: document.clone(), container: self.container.clone() }),
            input: Box::new(self.prompt.clone()),
            trigger: Box::new(DomTrigger { button: self.button.clone() }),
        }
    }
}

/// Look up and type-check the widget's elements.
///
/// # Errors
///
/// Returns [`BindError`] if an id is missing or names the wrong kind of element.
pub fn bind(document: &Document, config: &WidgetConfig) -> Result<BoundElements, BindError> {
    let container = element_by_id(document, &config.transcript_id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| wrong_element(&config.transcript_id, "an HTML element"))?;

    let prompt = match element_by_id(document, &config.prompt_id)?.dyn_into::<HtmlTextAreaElement>() {
        Ok(area) => PromptField::TextArea(area),
        Err(other) => other
            .dyn_into::<HtmlInputElement>()
            .map(PromptField::Input)
            .map_err(|_| wrong_element(&config.prompt_id, "a <textarea> or <input>"))?,
    };

    let button = element_by_id(document, &config.trigger_id)?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| wrong_element(&config.trigger_id, "a <button>"))?;

    Ok(BoundElements { container, prompt, button })
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement { id: id.to_owned() })
}

fn wrong_element(id: &str, expected: &'static str) -> BindError {
    BindError::WrongElement { id: id.to_owned(), expected }
}

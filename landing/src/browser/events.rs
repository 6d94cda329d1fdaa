//! Document click source for the interaction recorder.

use availio::analytics::{ClickHandler, ClickSource, DomNode};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, EventTarget, HtmlInputElement, HtmlTextAreaElement};

use super::js_error;

/// `web_sys::Element` seen through [`DomNode`].
#[derive(Clone)]
pub struct BrowserElement(pub Element);

impl BrowserElement {
    /// Element behind an event target, if the target is one.
    pub fn from_target(target: Option<EventTarget>) -> Option<Self> {
        target
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(BrowserElement)
    }
}

impl DomNode for BrowserElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn text_content(&self) -> Option<String> {
        self.0.text_content()
    }

    fn form_value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.0
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(BrowserElement)
    }
}

/// Capture-phase `click` listener on `document`.
pub struct DocumentClicks {
    document: web_sys::Document,
}

/// Keeps the JS closure alive until the listener is removed.
pub struct ClickRegistration(Closure<dyn Fn(web_sys::Event)>);

impl DocumentClicks {
    /// `None` outside a browser page.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl ClickSource for DocumentClicks {
    type Node = BrowserElement;
    type Registration = ClickRegistration;

    fn listen(&self, handler: ClickHandler<BrowserElement>) -> ClickRegistration {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(target) = BrowserElement::from_target(event.target()) {
                handler(target);
            }
        }) as Box<dyn Fn(web_sys::Event)>);

        if let Err(e) = self.document.add_event_listener_with_callback_and_bool(
            "click",
            closure.as_ref().unchecked_ref(),
            true,
        ) {
            tracing::warn!("click listener not registered: {}", js_error(&e));
        }
        ClickRegistration(closure)
    }

    fn unlisten(&self, registration: ClickRegistration) {
        let ClickRegistration(closure) = registration;
        if let Err(e) = self.document.remove_event_listener_with_callback_and_bool(
            "click",
            closure.as_ref().unchecked_ref(),
            true,
        ) {
            tracing::debug!("click listener not removed: {}", js_error(&e));
        }
    }

    fn current_location(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        format!("{path}{search}")
    }

    fn document_title(&self) -> String {
        self.document.title()
    }
}

// Browser implementations of the availio host capabilities
// Developed by the Availio Team (c)2025

mod events;
mod logging;
mod sinks;
mod storage;
mod ticker;

pub use events::{BrowserElement, DocumentClicks};
pub use logging::init_logging;
pub use sinks::{DataLayerSink, TagSink};
pub use storage::BrowserStore;
pub use ticker::IntervalTicker;

use wasm_bindgen::JsValue;

/// Readable message for a thrown JS value.
pub(crate) fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Bubble-phase listener for `kind` on `target`. Returns false, after
/// logging, when the browser refuses the registration.
pub(crate) fn add_listener(target: &web_sys::EventTarget, kind: &str, callback: &js_sys::Function) -> bool {
    match target.add_event_listener_with_callback(kind, callback) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(kind, "listener not registered: {}", js_error(&e));
            false
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn registered_listener_fires() {
        let target = web_sys::EventTarget::new().unwrap();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            counter.set(counter.get() + 1);
        }) as Box<dyn FnMut(_)>);

        assert!(add_listener(&target, "ping", callback.as_ref().unchecked_ref()));
        target.dispatch_event(&web_sys::Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn js_error_reads_message() {
        let error = js_sys::Error::new("listener rejected");
        assert_eq!(js_error(&error.into()), "listener rejected");
        assert_eq!(js_error(&JsValue::from_str("plain")), "plain");
    }
}

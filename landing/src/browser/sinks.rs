//! Tag-manager sinks: `gtag` and the GTM `dataLayer`.
//!
//! Both look their global up on every delivery, so a tag script that loads
//! late (or never, with an ad blocker) is handled per event.

use availio::analytics::{AnalyticsEvent, EventSink, SinkError};
use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::js_error;

fn global(name: &'static str) -> Result<JsValue, SinkError> {
    let window = web_sys::window().ok_or(SinkError::Missing(name))?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).map_err(|_| SinkError::Missing(name))?;
    if value.is_undefined() || value.is_null() {
        return Err(SinkError::Missing(name));
    }
    Ok(value)
}

fn to_js(value: &impl serde::Serialize) -> Result<JsValue, SinkError> {
    let json = serde_json::to_string(value)?;
    JSON::parse(&json).map_err(|e| SinkError::Encode(js_error(&e)))
}

/// `gtag('event', name, params)` for clicks, `gtag('config', id, params)`
/// for page views.
pub struct TagSink {
    measurement_id: String,
}

impl TagSink {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }
}

impl EventSink for TagSink {
    fn name(&self) -> &'static str {
        "gtag"
    }

    fn deliver(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        let gtag: Function = global("gtag")?
            .dyn_into()
            .map_err(|_| SinkError::Missing("gtag"))?;
        let params = to_js(event)?;

        let (command, target) = match event {
            AnalyticsEvent::Click(_) => ("event", event.name()),
            AnalyticsEvent::PageView(_) => ("config", self.measurement_id.as_str()),
        };
        gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str(command),
            &JsValue::from_str(target),
            &params,
        )
        .map_err(|e| SinkError::Rejected {
            sink: "gtag",
            reason: js_error(&e),
        })?;
        Ok(())
    }
}

/// `dataLayer.push({ event, ...params })`.
#[derive(Default)]
pub struct DataLayerSink;

impl EventSink for DataLayerSink {
    fn name(&self) -> &'static str {
        "dataLayer"
    }

    fn deliver(&self, event: &AnalyticsEvent) -> Result<(), SinkError> {
        let layer: Array = global("dataLayer")?
            .dyn_into()
            .map_err(|_| SinkError::Missing("dataLayer"))?;
        layer.push(&to_js(&event.data_layer_entry())?);
        Ok(())
    }
}

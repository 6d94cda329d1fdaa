//! Normalized analytics records and their wire shape.
//!
//! Field names on the wire follow the GA4 custom parameters configured in the
//! tag manager (`button_text`, `location_path`, ...), so they differ from the
//! Rust field names.

use serde::Serialize;

use super::dom::DomNode;
use super::{EVENT_ATTR, LABEL_ATTR, SKIP_ATTR};
use crate::config::AnalyticsConfig;

/// Event name pushed to the data layer for page views.
pub const PAGE_VIEW_EVENT: &str = "page_view";

/// One click on an actionable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionEvent {
    /// `data-ga-event` or the configured default (`button_click`)
    #[serde(skip)]
    pub event_name: String,
    /// Human-readable label, at most `label_max_chars` characters
    #[serde(rename = "button_text")]
    pub label: String,
    /// `id` attribute
    #[serde(rename = "button_id", skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    /// `name` attribute
    #[serde(rename = "button_name", skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,
    /// `role` attribute, else the lowercase tag name
    #[serde(rename = "button_role", skip_serializing_if = "Option::is_none")]
    pub element_role: Option<String>,
    /// Trimmed `class` attribute
    #[serde(rename = "button_classes", skip_serializing_if = "Option::is_none")]
    pub element_classes: Option<String>,
    /// Pathname + query at click time
    pub location_path: String,
    /// Raw `href` for links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl InteractionEvent {
    /// Build the record for an already-matched actionable `element`.
    ///
    /// Returns `None` when the element carries `data-ga-skip="true"`.
    pub fn from_element<N: DomNode>(
        element: &N,
        location_path: &str,
        config: &AnalyticsConfig,
    ) -> Option<Self> {
        if element.attribute(SKIP_ATTR).as_deref() == Some("true") {
            return None;
        }

        let tag = element.tag_name().to_ascii_lowercase();
        let event_name = non_empty(element.attribute(EVENT_ATTR))
            .unwrap_or_else(|| config.default_event_name.clone());
        let link_url = if tag == "a" {
            element.attribute("href")
        } else {
            None
        };

        Some(Self {
            event_name,
            label: derive_label(element, config.label_max_chars),
            element_id: non_empty(element.attribute("id")),
            element_name: non_empty(element.attribute("name")),
            element_role: non_empty(element.attribute("role")).or(non_empty(Some(tag))),
            element_classes: non_empty(element.attribute("class").map(|c| c.trim().to_string())),
            location_path: location_path.to_string(),
            link_url: non_empty(link_url),
        })
    }
}

/// Label for `element`: `data-ga-label`, then `aria-label`, then visible
/// text, then the form value. Trimmed and cut to `max_chars` characters.
///
/// Candidates are compared after trimming, so a whitespace-only attribute
/// does not count as present: `aria-label="   "` falls through to the
/// visible text instead of producing an empty label.
pub fn derive_label<N: DomNode>(element: &N, max_chars: usize) -> String {
    let candidates = [
        element.attribute(LABEL_ATTR),
        element.attribute("aria-label"),
        element.text_content(),
        element.form_value(),
    ];

    candidates
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
        .map(|s| s.chars().take(max_chars).collect())
        .unwrap_or_default()
}

/// One completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageViewEvent {
    /// Pathname + query
    #[serde(rename = "page_path")]
    pub path: String,
    /// Supplied title or the document title
    #[serde(rename = "page_title")]
    pub title: String,
}

/// What sinks receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsEvent {
    /// Click on an actionable element
    Click(InteractionEvent),
    /// Route change
    PageView(PageViewEvent),
}

impl AnalyticsEvent {
    /// Event name as sent to the tag manager.
    pub fn name(&self) -> &str {
        match self {
            AnalyticsEvent::Click(click) => &click.event_name,
            AnalyticsEvent::PageView(_) => PAGE_VIEW_EVENT,
        }
    }

    /// Flat parameter object (`{ button_text, ... }` or `{ page_path, page_title }`).
    pub fn params(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// `{ event, ...params }` record for the GTM data layer.
    pub fn data_layer_entry(&self) -> DataLayerEntry<'_> {
        DataLayerEntry {
            event: self.name(),
            params: self,
        }
    }
}

/// Data layer record: the event name next to the flattened parameters.
#[derive(Debug, Serialize)]
pub struct DataLayerEntry<'a> {
    /// Event name
    pub event: &'a str,
    /// Parameters, flattened into the same object
    #[serde(flatten)]
    pub params: &'a AnalyticsEvent,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Default)]
    struct El {
        tag: &'static str,
        attrs: Vec<(&'static str, &'static str)>,
        text: Option<String>,
        value: Option<String>,
    }

    impl DomNode for El {
        fn tag_name(&self) -> String {
            self.tag.to_uppercase()
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }

        fn text_content(&self) -> Option<String> {
            self.text.clone()
        }

        fn form_value(&self) -> Option<String> {
            self.value.clone()
        }

        fn parent(&self) -> Option<Self> {
            None
        }
    }

    fn config() -> AnalyticsConfig {
        AnalyticsConfig::default()
    }

    #[test]
    fn label_precedence() {
        let all = El {
            tag: "button",
            attrs: vec![("data-ga-label", "explicit"), ("aria-label", "aria")],
            text: Some("text".into()),
            value: Some("value".into()),
        };
        assert_eq!(derive_label(&all, 100), "explicit");

        let aria = El {
            tag: "button",
            attrs: vec![("aria-label", "Close menu")],
            text: Some("X".into()),
            ..Default::default()
        };
        assert_eq!(derive_label(&aria, 100), "Close menu");

        let text = El {
            tag: "button",
            attrs: vec![("aria-label", "")],
            text: Some("  Request Demo \n".into()),
            ..Default::default()
        };
        assert_eq!(derive_label(&text, 100), "Request Demo");

        let blank_aria = El {
            tag: "button",
            attrs: vec![("data-ga-label", " "), ("aria-label", "   ")],
            text: Some("Visible".into()),
            ..Default::default()
        };
        assert_eq!(derive_label(&blank_aria, 100), "Visible");

        let value = El {
            tag: "input",
            text: Some("   ".into()),
            value: Some("Subscribe".into()),
            ..Default::default()
        };
        assert_eq!(derive_label(&value, 100), "Subscribe");

        let nothing = El {
            tag: "button",
            ..Default::default()
        };
        assert_eq!(derive_label(&nothing, 100), "");
    }

    #[test]
    fn label_truncates_on_char_boundary() {
        let long = "ü".repeat(150);
        let el = El {
            tag: "button",
            text: Some(long),
            ..Default::default()
        };
        let label = derive_label(&el, 100);
        assert_eq!(label.chars().count(), 100);
    }

    #[test]
    fn button_click_params() {
        let el = El {
            tag: "button",
            attrs: vec![("id", "hero-cta"), ("class", "  btn btn-primary ")],
            text: Some("Contact Sales".into()),
            ..Default::default()
        };
        let event = InteractionEvent::from_element(&el, "/pricing?plan=gyms", &config())
            .expect("not skipped");
        assert_eq!(event.event_name, "button_click");

        let params = AnalyticsEvent::Click(event).params().unwrap();
        assert_eq!(
            params,
            json!({
                "button_text": "Contact Sales",
                "button_id": "hero-cta",
                "button_role": "button",
                "button_classes": "btn btn-primary",
                "location_path": "/pricing?plan=gyms",
            })
        );
    }

    #[test]
    fn link_captures_href_and_override() {
        let el = El {
            tag: "a",
            attrs: vec![
                ("href", "mailto:support@availio.com"),
                ("data-ga-event", "contact_email"),
                ("role", "link"),
            ],
            text: Some("support@availio.com".into()),
            ..Default::default()
        };
        let event = InteractionEvent::from_element(&el, "/contact", &config()).unwrap();
        assert_eq!(event.event_name, "contact_email");
        assert_eq!(event.element_role.as_deref(), Some("link"));
        assert_eq!(event.link_url.as_deref(), Some("mailto:support@availio.com"));
    }

    #[test]
    fn skip_marker_suppresses() {
        let el = El {
            tag: "button",
            attrs: vec![("data-ga-skip", "true")],
            text: Some("Hidden".into()),
            ..Default::default()
        };
        assert!(InteractionEvent::from_element(&el, "/", &config()).is_none());

        let not_skipped = El {
            tag: "button",
            attrs: vec![("data-ga-skip", "false")],
            ..Default::default()
        };
        assert!(InteractionEvent::from_element(&not_skipped, "/", &config()).is_some());
    }

    #[test]
    fn data_layer_entry_flattens() {
        let view = AnalyticsEvent::PageView(PageViewEvent {
            path: "/about".into(),
            title: "About | Availio".into(),
        });
        assert_eq!(view.name(), "page_view");
        assert_eq!(
            serde_json::to_value(view.data_layer_entry()).unwrap(),
            json!({
                "event": "page_view",
                "page_path": "/about",
                "page_title": "About | Availio",
            })
        );
    }
}

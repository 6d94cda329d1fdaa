//! Interaction analytics.
//!
//! One recorder per app taps every click on an actionable element (buttons,
//! `role="button"`, submit/button inputs, links with a destination) and every
//! completed navigation, normalizes them into flat records and hands them to
//! the registered sinks (`gtag`, the GTM `dataLayer`).
//!
//! Analytics is fail-open: a missing attribute, an absent sink or a sink that
//! throws never reaches the UI event pipeline.
//!
//! Element attributes understood by the recorder:
//!
//! | attribute       | effect                                   |
//! |-----------------|------------------------------------------|
//! | `data-ga-skip`  | `"true"` suppresses the click            |
//! | `data-ga-event` | event name instead of `button_click`     |
//! | `data-ga-label` | label instead of aria-label/text/value   |

mod dom;
mod event;
mod recorder;
mod sink;

pub use dom::{DomNode, closest_actionable, is_actionable, is_interactive_hover};
pub use event::{AnalyticsEvent, DataLayerEntry, InteractionEvent, PageViewEvent, derive_label};
pub use recorder::{ClickHandler, ClickSource, InstallGuard, InteractionRecorder};
pub use sink::{EventSink, SinkError};

/// Attribute that opts an element out of click tracking.
pub const SKIP_ATTR: &str = "data-ga-skip";
/// Attribute overriding the event name.
pub const EVENT_ATTR: &str = "data-ga-event";
/// Attribute overriding the label.
pub const LABEL_ATTR: &str = "data-ga-label";

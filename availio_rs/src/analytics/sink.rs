use thiserror::Error;

use super::AnalyticsEvent;

/// Why a sink did not take an event. The recorder logs and drops these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The backing global (`gtag`, `dataLayer`) is not loaded on this page.
    #[error("sink `{0}` is not available")]
    Missing(&'static str),
    /// The backend threw while handling the event.
    #[error("sink `{sink}` rejected event: {reason}")]
    Rejected {
        /// Sink name
        sink: &'static str,
        /// Backend message
        reason: String,
    },
    /// The event could not be converted to the backend's format.
    #[error("failed to encode event: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for SinkError {
    fn from(e: serde_json::Error) -> Self {
        SinkError::Encode(e.to_string())
    }
}

/// Consumer of normalized analytics events.
pub trait EventSink {
    /// Short name used in logs.
    fn name(&self) -> &'static str;
    /// Hand one event to the backend.
    fn deliver(&self, event: &AnalyticsEvent) -> Result<(), SinkError>;
}

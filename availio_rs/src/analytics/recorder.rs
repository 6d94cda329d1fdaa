//! The interaction recorder: one tap per app, fan-out to every sink.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::dom::{DomNode, closest_actionable};
use super::event::{AnalyticsEvent, InteractionEvent, PageViewEvent};
use super::sink::EventSink;
use crate::config::AnalyticsConfig;

/// Callback the click source invokes with the raw click target.
pub type ClickHandler<N> = Rc<dyn Fn(N)>;

/// Host capability delivering clicks and the current page context.
///
/// The browser implementation registers a capture-phase `click` listener on
/// the document, so clicks are seen even when inner handlers stop
/// propagation.
pub trait ClickSource {
    /// Element type handed to the handler.
    type Node: DomNode;
    /// Token identifying one registered listener.
    type Registration;

    /// Register `handler` for every click.
    fn listen(&self, handler: ClickHandler<Self::Node>) -> Self::Registration;
    /// Remove a listener registered by [`listen`](Self::listen).
    fn unlisten(&self, registration: Self::Registration);
    /// Pathname + query of the current page.
    fn current_location(&self) -> String;
    /// Title of the current document.
    fn document_title(&self) -> String;
}

thread_local! {
    // One click tap per UI thread, whichever recorder registered it.
    static TAP_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

struct RecorderInner<S> {
    source: S,
    config: AnalyticsConfig,
    sinks: RefCell<Vec<Box<dyn EventSink>>>,
}

impl<S: ClickSource> RecorderInner<S> {
    fn handle_click(&self, target: S::Node) -> Option<InteractionEvent> {
        let element = closest_actionable(target)?;
        let location = self.source.current_location();
        let event = InteractionEvent::from_element(&element, &location, &self.config)?;
        self.dispatch(&AnalyticsEvent::Click(event.clone()));
        Some(event)
    }

    fn dispatch(&self, event: &AnalyticsEvent) {
        for sink in self.sinks.borrow().iter() {
            if let Err(e) = sink.deliver(event) {
                tracing::debug!(sink = sink.name(), event = event.name(), "analytics event dropped: {e}");
            }
        }
    }
}

/// Shared handle to the app's interaction recorder.
///
/// Clones share the same recorder and sinks, so the app root creates one and
/// hands clones to whoever needs to record page views. The click tap is
/// tracked per thread: only one recorder can have it installed at a time.
pub struct InteractionRecorder<S> {
    inner: Rc<RecorderInner<S>>,
}

impl<S> Clone for InteractionRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: ClickSource + 'static> InteractionRecorder<S> {
    /// Recorder reading clicks from `source`. Nothing is listened to until
    /// [`install`](Self::install).
    pub fn new(source: S, config: &AnalyticsConfig) -> Self {
        Self {
            inner: Rc::new(RecorderInner {
                source,
                config: config.clone(),
                sinks: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a sink; events go to sinks in registration order.
    pub fn add_sink(&self, sink: impl EventSink + 'static) {
        tracing::debug!(sink = sink.name(), "analytics sink registered");
        self.inner.sinks.borrow_mut().push(Box::new(sink));
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.inner.sinks.borrow().len()
    }

    /// Whether a click tap is currently registered on this thread, by this
    /// or any other recorder.
    pub fn is_installed(&self) -> bool {
        TAP_INSTALLED.with(Cell::get)
    }

    /// Register the click listener.
    ///
    /// Idempotent across recorders: while any recorder on this thread holds
    /// the tap, this registers nothing and returns an inert guard. Dropping the active guard removes the listener and
    /// allows installing again.
    #[must_use = "dropping the guard uninstalls the click listener"]
    pub fn install(&self) -> InstallGuard<S> {
        if self.is_installed() {
            tracing::debug!("interaction recorder already installed");
            return InstallGuard { active: None };
        }

        let weak: Weak<RecorderInner<S>> = Rc::downgrade(&self.inner);
        let handler: ClickHandler<S::Node> = Rc::new(move |target| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_click(target);
            }
        });
        let registration = self.inner.source.listen(handler);
        TAP_INSTALLED.with(|flag| flag.set(true));
        tracing::info!("interaction recorder installed");

        InstallGuard {
            active: Some((Rc::clone(&self.inner), registration)),
        }
    }

    /// Record a click on `target` directly, bypassing the listener.
    ///
    /// Returns the recorded event, or `None` when the target has no
    /// actionable ancestor or opts out with `data-ga-skip`.
    pub fn record_click(&self, target: S::Node) -> Option<InteractionEvent> {
        self.inner.handle_click(target)
    }

    /// Record one completed navigation. `title` defaults to the document title.
    pub fn record_page_view(&self, path: &str, title: Option<&str>) -> PageViewEvent {
        let title = match title.filter(|t| !t.is_empty()) {
            Some(title) => title.to_string(),
            None => self.inner.source.document_title(),
        };
        let view = PageViewEvent {
            path: path.to_string(),
            title,
        };
        tracing::debug!(path, "page view");
        self.inner.dispatch(&AnalyticsEvent::PageView(view.clone()));
        view
    }
}

/// Keeps the click listener registered while alive.
pub struct InstallGuard<S: ClickSource> {
    active: Option<(Rc<RecorderInner<S>>, S::Registration)>,
}

impl<S: ClickSource> InstallGuard<S> {
    /// False for the inert guard returned by a repeated `install`.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Remove the listener now and clear the installed flag.
    pub fn teardown(self) {
        drop(self);
    }
}

impl<S: ClickSource> Drop for InstallGuard<S> {
    fn drop(&mut self) {
        if let Some((inner, registration)) = self.active.take() {
            inner.source.unlisten(registration);
            TAP_INSTALLED.with(|flag| flag.set(false));
            tracing::info!("interaction recorder uninstalled");
        }
    }
}

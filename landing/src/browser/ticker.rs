//! Showcase alternation on `setInterval`.

use std::rc::Rc;
use std::time::Duration;

use availio::showcase::Ticker;
use leptos::prelude::*;

use super::js_error;

/// Browser interval driving the showcase. At most one interval is armed;
/// `restart` clears the previous one first.
pub struct IntervalTicker {
    on_tick: Rc<dyn Fn()>,
    handle: Option<IntervalHandle>,
}

impl IntervalTicker {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            handle: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn restart(&mut self, period: Duration) {
        self.cancel();
        let on_tick = Rc::clone(&self.on_tick);
        match set_interval_with_handle(move || on_tick(), period) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => tracing::warn!("showcase interval not armed: {}", js_error(&e)),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

use std::time::Duration;

use super::geometry::{EmphasisGeometry, GeometryConfig, compute_emphasis_geometry};
use super::{ShowcasePreference, Side, TransitionSource};
use crate::config::ShowcaseConfig;
use crate::storage::KeyValueStore;

/// Recurring timer driving the automatic alternation.
///
/// Implementations call [`ShowcaseController::on_automatic_tick`] every
/// `period` after the last `restart`. A `restart` must cancel whatever was
/// scheduled before, so at most one schedule is ever live.
pub trait Ticker {
    /// Cancel any pending schedule and tick every `period` from now.
    fn restart(&mut self, period: Duration);
    /// Cancel any pending schedule.
    fn cancel(&mut self);
}

/// Showcase state machine with two states, `Left` and `Right`.
///
/// `on_manual_select(side)` moves to `side` and restarts the alternation clock;
/// `on_automatic_tick()` moves to the opposite side. There is no neutral state:
/// hover-end is a no-op, so the last emphasized side stays emphasized.
pub struct ShowcaseController<S, T> {
    store: S,
    ticker: T,
    storage_key: String,
    interval: Duration,
    geometry: GeometryConfig,
    preference: ShowcasePreference,
    running: bool,
}

impl<S: KeyValueStore, T: Ticker> ShowcaseController<S, T> {
    /// Controller in the default state. Call [`initialize`](Self::initialize)
    /// to pick up the persisted side.
    pub fn new(store: S, ticker: T, config: &ShowcaseConfig) -> Self {
        Self {
            store,
            ticker,
            storage_key: config.storage_key.clone(),
            interval: config.interval(),
            geometry: GeometryConfig::from(config),
            preference: ShowcasePreference::default(),
            running: false,
        }
    }

    /// Read the persisted side. Missing, unreadable or unknown values fall
    /// back to `Left`.
    pub fn initialize(&mut self) -> ShowcasePreference {
        let side = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw.parse::<Side>().unwrap_or_else(|e| {
                tracing::debug!("ignoring stored showcase preference: {e}");
                Side::Left
            }),
            Ok(None) => Side::Left,
            Err(e) => {
                tracing::debug!("showcase preference unavailable: {e}");
                Side::Left
            }
        };

        self.preference = ShowcasePreference {
            side,
            source: TransitionSource::Automatic,
        };
        self.preference
    }

    /// Arm the alternation timer. Calling again restarts it from zero.
    pub fn start(&mut self) {
        self.running = true;
        self.ticker.restart(self.interval);
    }

    /// Cancel the alternation timer. The persisted side is kept.
    pub fn stop(&mut self) {
        self.running = false;
        self.ticker.cancel();
    }

    /// Whether the alternation timer is armed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Hover start or click on a panel.
    ///
    /// Always persists and restarts the timer, even when `side` is already
    /// emphasized: the next automatic flip is a full interval away.
    pub fn on_manual_select(&mut self, side: Side) -> ShowcasePreference {
        self.transition(side, TransitionSource::User);
        if self.running {
            self.ticker.restart(self.interval);
        }
        self.preference
    }

    /// Hover end. Emphasis is sticky, so nothing changes.
    pub fn on_hover_end(&mut self) -> ShowcasePreference {
        self.preference
    }

    /// Alternation tick: flip to the other panel.
    pub fn on_automatic_tick(&mut self) -> ShowcasePreference {
        let next = self.preference.side.opposite();
        self.transition(next, TransitionSource::Automatic);
        self.preference
    }

    /// Current preference.
    pub fn preference(&self) -> ShowcasePreference {
        self.preference
    }

    /// Current emphasized side.
    pub fn side(&self) -> Side {
        self.preference.side
    }

    /// Panel regions for the current side.
    pub fn geometry(&self) -> EmphasisGeometry {
        compute_emphasis_geometry(self.preference.side, &self.geometry)
    }

    /// Alternation period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn transition(&mut self, side: Side, source: TransitionSource) {
        self.preference = ShowcasePreference { side, source };
        if let Err(e) = self.store.set(&self.storage_key, side.as_str()) {
            tracing::debug!("showcase preference not persisted: {e}");
        }
        tracing::debug!(side = side.as_str(), ?source, "showcase transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum TickerCall {
        Restart(Duration),
        Cancel,
    }

    #[derive(Default, Clone)]
    struct RecordingTicker {
        calls: Rc<RefCell<Vec<TickerCall>>>,
    }

    impl Ticker for RecordingTicker {
        fn restart(&mut self, period: Duration) {
            self.calls.borrow_mut().push(TickerCall::Restart(period));
        }

        fn cancel(&mut self) {
            self.calls.borrow_mut().push(TickerCall::Cancel);
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".into(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".into(),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("blocked".into()))
        }
    }

    const KEY: &str = "landing-hover-preference";

    fn controller(
        store: Rc<MemoryStore>,
    ) -> (
        ShowcaseController<Rc<MemoryStore>, RecordingTicker>,
        Rc<RefCell<Vec<TickerCall>>>,
    ) {
        let ticker = RecordingTicker::default();
        let calls = Rc::clone(&ticker.calls);
        let controller = ShowcaseController::new(store, ticker, &ShowcaseConfig::default());
        (controller, calls)
    }

    #[test]
    fn initialize_defaults_to_left() {
        let (mut c, _) = controller(Rc::new(MemoryStore::new()));
        let pref = c.initialize();
        assert_eq!(pref.side, Side::Left);
        assert_eq!(pref.source, TransitionSource::Automatic);
    }

    #[test]
    fn initialize_reads_persisted_side() {
        let store = Rc::new(MemoryStore::with_entries([(KEY, "right")]));
        let (mut c, _) = controller(store);
        assert_eq!(c.initialize().side, Side::Right);
    }

    #[test]
    fn initialize_ignores_garbage() {
        let store = Rc::new(MemoryStore::with_entries([(KEY, "center")]));
        let (mut c, _) = controller(store);
        assert_eq!(c.initialize().side, Side::Left);
    }

    #[test]
    fn manual_select_persists_and_restarts_timer() {
        let store = Rc::new(MemoryStore::new());
        let (mut c, calls) = controller(Rc::clone(&store));
        c.initialize();
        c.start();

        let pref = c.on_manual_select(Side::Right);
        assert_eq!(pref.side, Side::Right);
        assert_eq!(pref.source, TransitionSource::User);
        assert_eq!(store.get(KEY), Ok(Some("right".to_string())));

        // same side again still resets the clock
        c.on_manual_select(Side::Right);
        let period = Duration::from_millis(7000);
        assert_eq!(
            *calls.borrow(),
            vec![
                TickerCall::Restart(period),
                TickerCall::Restart(period),
                TickerCall::Restart(period),
            ]
        );
    }

    #[test]
    fn manual_select_while_stopped_leaves_timer_alone() {
        let (mut c, calls) = controller(Rc::new(MemoryStore::new()));
        c.on_manual_select(Side::Right);
        assert!(calls.borrow().is_empty());
        assert!(!c.is_running());
    }

    #[test]
    fn last_manual_selection_is_persisted() {
        let store = Rc::new(MemoryStore::new());
        let (mut c, _) = controller(Rc::clone(&store));
        c.start();
        let picks = [Side::Left, Side::Right, Side::Right, Side::Left, Side::Right];
        for side in picks {
            c.on_manual_select(side);
        }
        assert_eq!(store.get(KEY), Ok(Some("right".to_string())));
    }

    #[test]
    fn tick_toggles_and_double_tick_returns() {
        let store = Rc::new(MemoryStore::new());
        let (mut c, calls) = controller(Rc::clone(&store));
        c.initialize();

        let pref = c.on_automatic_tick();
        assert_eq!(pref.side, Side::Right);
        assert_eq!(pref.source, TransitionSource::Automatic);
        assert_eq!(store.get(KEY), Ok(Some("right".to_string())));

        assert_eq!(c.on_automatic_tick().side, Side::Left);
        assert_eq!(store.get(KEY), Ok(Some("left".to_string())));
        assert!(calls.borrow().is_empty(), "ticks never touch the ticker");
    }

    #[test]
    fn hover_end_is_sticky() {
        let (mut c, _) = controller(Rc::new(MemoryStore::new()));
        c.on_manual_select(Side::Right);
        assert_eq!(c.on_hover_end().side, Side::Right);
        assert_eq!(c.side(), Side::Right);
    }

    #[test]
    fn stop_cancels_timer() {
        let (mut c, calls) = controller(Rc::new(MemoryStore::new()));
        c.start();
        c.stop();
        assert!(!c.is_running());
        assert_eq!(calls.borrow().last(), Some(&TickerCall::Cancel));
    }

    #[test]
    fn broken_storage_never_blocks_transitions() {
        let ticker = RecordingTicker::default();
        let calls = Rc::clone(&ticker.calls);
        let mut c = ShowcaseController::new(BrokenStore, ticker, &ShowcaseConfig::default());

        assert_eq!(c.initialize().side, Side::Left);
        c.start();
        assert_eq!(c.on_manual_select(Side::Right).side, Side::Right);
        assert_eq!(c.on_automatic_tick().side, Side::Left);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn geometry_follows_side() {
        let (mut c, _) = controller(Rc::new(MemoryStore::new()));
        assert_eq!(c.geometry().boundary(), (100.0, 60.0));
        c.on_automatic_tick();
        assert_eq!(c.geometry().boundary(), (40.0, 0.0));
    }
}

//! # availio
//!
//! Framework-independent core of the Availio landing site.
//!
//! The landing page itself is a Leptos CSR app (`availio-landing`), but the
//! parts with actual behavior live here so they can be driven and tested
//! without a browser:
//!
//! - **Showcase** - the owner/member panel state machine: persisted
//!   preference, manual selection, automatic alternation, split geometry
//! - **Analytics** - the interaction recorder that turns clicks on actionable
//!   elements and route changes into normalized events for tag-manager sinks
//! - **Forms** - email validation and the idle/submitting/success/error state
//! - **Catalog** - feature and pricing data with the platform filters
//!
//! Host capabilities (key/value storage, timers, DOM, click source, sinks) are
//! traits. The landing crate implements them over `web_sys`; tests use the
//! in-memory versions.
//!
//! ## Quick Start
//!
//! ```rust
//! use availio::config::ShowcaseConfig;
//! use availio::showcase::{ShowcaseController, Side, Ticker};
//! use availio::storage::MemoryStore;
//! use std::time::Duration;
//!
//! struct NoTimer;
//! impl Ticker for NoTimer {
//!     fn restart(&mut self, _period: Duration) {}
//!     fn cancel(&mut self) {}
//! }
//!
//! let mut showcase = ShowcaseController::new(MemoryStore::new(), NoTimer, &ShowcaseConfig::default());
//! assert_eq!(showcase.initialize().side, Side::Left);
//!
//! showcase.start();
//! showcase.on_automatic_tick();
//! assert_eq!(showcase.side(), Side::Right);
//! ```
//!
//! ---
//!
//! Developed by the Availio Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod forms;
pub mod showcase;
pub mod storage;

pub use analytics::{AnalyticsEvent, InteractionEvent, InteractionRecorder, PageViewEvent};
pub use config::AvailioConfig;
pub use showcase::{ShowcaseController, ShowcasePreference, Side};

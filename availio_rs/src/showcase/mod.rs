//! Owner/member showcase on the landing page.
//!
//! Two panels share the hero; one of them is always emphasized. The emphasis
//! follows the most recent signal: a hover/click on a panel, or the automatic
//! alternation that flips sides on a fixed period. Every manual signal
//! restarts the alternation clock, and the last side is persisted so a
//! returning visitor sees the panel they left on.

mod controller;
mod geometry;
mod preference;

pub use controller::{ShowcaseController, Ticker};
pub use geometry::{EmphasisGeometry, GeometryConfig, RegionShape, compute_emphasis_geometry};
pub use preference::{ParseSideError, ShowcasePreference, Side, TransitionSource};

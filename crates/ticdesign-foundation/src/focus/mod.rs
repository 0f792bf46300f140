//! Focus-centered list engine.
//!
//! A vertically scrolling list of fixed-height items (a third of the viewport
//! plus one pixel) that keeps one item logically centered. Only a contiguous
//! window of items is materialized; slots that leave the viewport go back to
//! the host's [`ItemProvider`].
//!
//! The engine is single-threaded and driven entirely by host callbacks:
//! layout requests, scroll deltas, scroll state changes and frame ticks.

mod centering;
mod config;
mod error;
mod geometry;
mod item_provider;
mod layout_manager;
mod layout_pass;
mod listeners;
mod proximity;
mod scroll_engine;
mod slot;
mod smooth_scroll;
mod tap;
mod window;

#[cfg(test)]
pub mod test_helpers;

pub use centering::{CenterFinder, NearestCenterFinder};
pub use config::{
    FocusListConfig, DEFAULT_DENSITY_DPI, DEFAULT_MILLISECONDS_PER_INCH,
    DEFAULT_PRESS_RELEASE_DELAY_MILLIS,
};
pub use error::FocusListError;
pub use geometry::{Padding, ViewportGeometry, ITEMS_PER_VIEWPORT};
pub use item_provider::ItemProvider;
pub use layout_manager::{FocusLayoutManager, LayoutEngine, ScrollState};
pub use proximity::{ProximityEvent, SmallSlotVec};
pub use slot::{PlacedSlot, SlotBounds};
pub use smooth_scroll::{
    CenteringSmoothScroller, ScrollDirection, SmoothScroller, TARGET_SEEK_EXTRA_SCROLL_RATIO,
    TARGET_SEEK_SCROLL_DISTANCE_PX,
};
pub use tap::TapEvent;
pub use window::Window;

//! Foundation elements for ticDesign: the focus-centered list engine.

pub mod focus;

#[cfg(test)]
mod tests;

pub use focus::*;

pub mod prelude {
    pub use crate::focus::{
        CenterFinder, CenteringSmoothScroller, FocusLayoutManager, FocusListConfig,
        FocusListError, ItemProvider, LayoutEngine, NearestCenterFinder, Padding,
        ProximityEvent, ScrollDirection, ScrollState, SlotBounds, SmoothScroller, TapEvent,
        ViewportGeometry,
    };
}

//! Placed slot representation.
//!
//! A slot is the engine's record of one materialized item: where it sits and
//! which adapter position it shows. The provider's handle rides along so it
//! can be released later.

use super::geometry::ViewportGeometry;

/// Bounds and adapter position of a placed slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotBounds {
    /// Adapter position, or `None` once the item was removed from the data set.
    pub position: Option<usize>,
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl SlotBounds {
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) / 2
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Whether any part of the slot touches the viewport rectangle.
    pub fn intersects_viewport(&self, geometry: &ViewportGeometry) -> bool {
        self.right >= 0
            && self.left <= geometry.width
            && self.bottom >= 0
            && self.top <= geometry.height
    }
}

/// A materialized slot inside the window.
#[derive(Debug)]
pub struct PlacedSlot<S> {
    pub(crate) slot: S,
    pub(crate) bounds: SlotBounds,
}

impl<S> PlacedSlot<S> {
    pub(crate) fn new(slot: S, position: usize, left: i32, top: i32, right: i32, height: i32) -> Self {
        Self {
            slot,
            bounds: SlotBounds {
                position: Some(position),
                left,
                top,
                right,
                bottom: top + height,
            },
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn bounds(&self) -> SlotBounds {
        self.bounds
    }

    pub fn position(&self) -> Option<usize> {
        self.bounds.position
    }

    pub fn top(&self) -> i32 {
        self.bounds.top
    }

    pub fn bottom(&self) -> i32 {
        self.bounds.bottom
    }

    pub(crate) fn offset_vertical(&mut self, dy: i32) {
        self.bounds.top += dy;
        self.bounds.bottom += dy;
    }

    pub(crate) fn into_slot(self) -> S {
        self.slot
    }
}

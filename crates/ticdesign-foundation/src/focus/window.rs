//! Window/position tracking for the focus list.
//!
//! The window is the contiguous run of materialized slots. It starts at
//! `first_position` and covers `[first_position, last_position)`; positions
//! only ever move by whole slots as they are added or recycled.

use std::collections::VecDeque;

use super::geometry::ViewportGeometry;
use super::item_provider::ItemProvider;
use super::slot::{PlacedSlot, SlotBounds};

/// Materialized slots plus the bookkeeping flags the layout pass consumes.
#[derive(Debug)]
pub struct Window<S> {
    /// Adapter position of the first materialized slot.
    pub(crate) first_position: usize,
    /// Place the first slot one item higher on the next layout, so the slot
    /// after it lands in the center.
    pub(crate) push_first_higher: bool,
    /// Keep the central item where it is on the next layout.
    pub(crate) use_old_top: bool,
    pub(crate) slots: VecDeque<PlacedSlot<S>>,
}

impl<S> Default for Window<S> {
    fn default() -> Self {
        Self {
            first_position: 0,
            push_first_higher: false,
            use_old_top: true,
            slots: VecDeque::new(),
        }
    }
}

impl<S> Window<S> {
    pub fn first_position(&self) -> usize {
        self.first_position
    }

    pub fn last_position(&self) -> usize {
        self.first_position + self.slots.len()
    }

    pub fn push_first_higher(&self) -> bool {
        self.push_first_higher
    }

    pub fn use_old_top(&self) -> bool {
        self.use_old_top
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlacedSlot<S>> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedSlot<S>> {
        self.slots.iter()
    }

    pub fn bounds(&self) -> impl Iterator<Item = SlotBounds> + '_ {
        self.slots.iter().map(PlacedSlot::bounds)
    }

    /// Window slot index showing `position`, if materialized.
    pub fn index_of(&self, position: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|placed| placed.position() == Some(position))
    }

    pub(crate) fn first_top(&self) -> Option<i32> {
        self.slots.front().map(PlacedSlot::top)
    }

    pub(crate) fn last_bottom(&self) -> Option<i32> {
        self.slots.back().map(PlacedSlot::bottom)
    }

    pub(crate) fn offset_children_vertical(&mut self, dy: i32) {
        if dy == 0 {
            return;
        }
        for placed in self.slots.iter_mut() {
            placed.offset_vertical(dy);
        }
    }

    pub(crate) fn prepend(&mut self, placed: PlacedSlot<S>) {
        self.slots.push_front(placed);
    }

    pub(crate) fn append(&mut self, placed: PlacedSlot<S>) {
        self.slots.push_back(placed);
    }

    /// Hands every slot back to the provider.
    pub(crate) fn release_all<P>(&mut self, provider: &mut P)
    where
        P: ItemProvider<Slot = S>,
    {
        for placed in self.slots.drain(..) {
            provider.release(placed.into_slot());
        }
    }

    /// Releases slots that left the viewport from both ends of the window.
    ///
    /// A slot showing `focused` is kept even off-screen. When nothing is
    /// visible the first slot survives so the window never empties during a
    /// scroll. Returns the number of slots released from the top.
    pub(crate) fn recycle_out_of_bounds<P>(
        &mut self,
        provider: &mut P,
        geometry: &ViewportGeometry,
        focused: Option<usize>,
    ) -> usize
    where
        P: ItemProvider<Slot = S>,
    {
        let mut visible: Option<(usize, usize)> = None;
        for (i, placed) in self.slots.iter().enumerate() {
            let has_focus = focused.is_some() && placed.position() == focused;
            if has_focus || placed.bounds.intersects_viewport(geometry) {
                visible = Some(match visible {
                    None => (i, i),
                    Some((first, _)) => (first, i),
                });
            }
        }
        let (first, last) = visible.unwrap_or((0, 0));

        while self.slots.len() > last + 1 {
            if let Some(placed) = self.slots.pop_back() {
                provider.release(placed.into_slot());
            }
        }
        for _ in 0..first {
            if let Some(placed) = self.slots.pop_front() {
                provider.release(placed.into_slot());
            }
        }

        if self.slots.is_empty() {
            self.first_position = 0;
        } else if first > 0 {
            self.push_first_higher = true;
            self.first_position += first;
        }
        first
    }

    /// Resets to an empty window anchored at position 0.
    pub(crate) fn reset<P>(&mut self, provider: &mut P)
    where
        P: ItemProvider<Slot = S>,
    {
        self.release_all(provider);
        self.first_position = 0;
        self.push_first_higher = false;
        self.use_old_top = true;
    }

    /// Shifts adapter positions after `count` items were inserted at `start`.
    pub(crate) fn positions_inserted(&mut self, start: usize, count: usize) {
        for placed in self.slots.iter_mut() {
            if let Some(position) = placed.bounds.position {
                if position >= start {
                    placed.bounds.position = Some(position + count);
                }
            }
        }
        if self.first_position >= start && !self.slots.is_empty() {
            self.first_position += count;
        }
    }

    /// Drops positions of removed items and shifts the ones after them.
    pub(crate) fn positions_removed(&mut self, start: usize, count: usize) {
        let end = start.saturating_add(count);
        for placed in self.slots.iter_mut() {
            if let Some(position) = placed.bounds.position {
                placed.bounds.position = if position >= end {
                    Some(position - count)
                } else if position >= start {
                    None
                } else {
                    Some(position)
                };
            }
        }
        if self.first_position >= end {
            self.first_position -= count;
        } else if self.first_position > start {
            self.first_position = start;
        }
    }

    /// Tracks a single item moving from `from` to `to`.
    pub(crate) fn position_moved(&mut self, from: usize, to: usize) {
        for placed in self.slots.iter_mut() {
            if let Some(position) = placed.bounds.position {
                let moved = if position == from {
                    to
                } else if from < to && position > from && position <= to {
                    position - 1
                } else if from > to && position >= to && position < from {
                    position + 1
                } else {
                    position
                };
                placed.bounds.position = Some(moved);
            }
        }
    }
}

//! Layout pass: re-anchors the window and rebuilds it from scratch.
//!
//! Every structural layout releases all slots and materializes the window
//! again from the resolved top. The anchor is, in order of preference:
//! 1. the central item's current top, when the last layout's position should
//!    be kept (`use_old_top`),
//! 2. one item above the centered slot, after a `scroll_to_position` that
//!    pushed the first item higher,
//! 3. the centered slot itself.

use web_time::{Duration, Instant};

use super::error::FocusListError;
use super::item_provider::ItemProvider;
use super::layout_manager::FocusLayoutManager;

/// Time budget for one layout pass; exceeding it is logged, not enforced.
const LAYOUT_TIME_BUDGET: Duration = Duration::from_millis(50);

impl<P: ItemProvider> FocusLayoutManager<P> {
    /// Lays the window out again.
    pub fn on_layout(&mut self) -> Result<(), FocusListError> {
        self.needs_layout = false;
        let item_count = self.provider.item_count();

        let top = if self.window.use_old_top && !self.window.is_empty() {
            self.resolve_old_top(item_count)?
        } else if self.window.push_first_higher {
            self.geometry.centered_top() - self.item_height()
        } else {
            self.geometry.centered_top()
        };

        self.perform_layout_children(item_count, top)?;

        self.window.use_old_top = true;
        self.window.push_first_higher = false;
        Ok(())
    }

    /// Top for the first slot that keeps the central item where it is.
    ///
    /// Also moves `first_position` so that walking down from it reaches the
    /// central item.
    fn resolve_old_top(&mut self, item_count: usize) -> Result<i32, FocusListError> {
        let center_slot = self.central_slot()?;
        let valid = |position: Option<usize>| position.filter(|&p| p < item_count);

        let anchor = self.nearest_valid_slot(center_slot, valid);

        let Some((slot, position)) = anchor else {
            log::warn!(
                "FocusList: no materialized slot kept a valid position, re-anchoring at 0"
            );
            self.window.first_position = 0;
            return Ok(self.geometry.centered_top());
        };

        let item_height = self.item_height();
        let padding_top = self.geometry.padding_top();
        let mut top = self.window.get(slot).map(|placed| placed.top()).unwrap_or(padding_top);
        let mut first_position = position;
        while top > padding_top && first_position > 0 {
            first_position -= 1;
            top -= item_height;
        }
        if first_position == 0 && top > self.geometry.centered_top() {
            top = self.geometry.centered_top();
        }

        log::debug!(
            "FocusList: keeping position {position} (slot {slot}), first position {first_position} at {top}"
        );
        self.window.first_position = first_position;
        Ok(top)
    }

    /// Searches outward from `center_slot`, next slot first, for a slot whose
    /// adapter position is still valid.
    fn nearest_valid_slot(
        &self,
        center_slot: usize,
        valid: impl Fn(Option<usize>) -> Option<usize>,
    ) -> Option<(usize, usize)> {
        let position_at = |slot: usize| valid(self.window.get(slot).and_then(|p| p.position()));

        if let Some(position) = position_at(center_slot) {
            return Some((center_slot, position));
        }

        let len = self.window.len();
        let mut spread = 1;
        while center_slot + spread < len || center_slot >= spread {
            let next = center_slot + spread;
            if next < len {
                if let Some(position) = position_at(next) {
                    return Some((next, position));
                }
            }
            if center_slot >= spread {
                let prev = center_slot - spread;
                if let Some(position) = position_at(prev) {
                    return Some((prev, position));
                }
            }
            spread += 1;
        }
        None
    }

    fn perform_layout_children(&mut self, item_count: usize, top: i32) -> Result<(), FocusListError> {
        self.window.release_all(&mut self.provider);

        if item_count == 0 {
            self.window.first_position = 0;
            return Ok(());
        }
        if self.window.first_position >= item_count {
            self.window.first_position = item_count - 1;
        }
        if self.geometry.is_empty() {
            log::warn!(
                "FocusList: laying out in an empty viewport ({}x{})",
                self.geometry.width,
                self.geometry.height
            );
        }

        let start_time = Instant::now();
        let parent_bottom = self.geometry.parent_bottom();
        let item_height = self.item_height();
        let mut top = top;
        let mut position = self.window.first_position;
        while position < item_count && top < parent_bottom {
            let placed = self.make_slot(position, top);
            self.window.append(placed);
            top += item_height;
            position += 1;
        }

        let elapsed = start_time.elapsed();
        if elapsed > LAYOUT_TIME_BUDGET {
            log::warn!(
                "FocusList: layout of {} slots took {:?}, over the {:?} budget",
                self.window.len(),
                elapsed,
                LAYOUT_TIME_BUDGET
            );
        }

        if !self.window.is_empty() {
            self.notify_children_about_proximity(false)?;
        }
        Ok(())
    }
}

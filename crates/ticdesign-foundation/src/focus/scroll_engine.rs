//! Scroll engine: turns a drag delta into slot shifts, new slots and recycling.
//!
//! The list rubber-bands at its edges without overscroll: position 0 can be
//! dragged no lower than the centered slot, and the last item no higher than
//! the slot above the center (from where the idle snap brings it back).

use super::error::FocusListError;
use super::item_provider::ItemProvider;
use super::layout_manager::FocusLayoutManager;
use super::slot::PlacedSlot;

impl<P: ItemProvider> FocusLayoutManager<P> {
    /// Scrolls the content by `dy` pixels and returns the distance actually
    /// scrolled.
    ///
    /// Positive `dy` moves content up (revealing later items), negative moves
    /// it down. The result is clamped at the list boundaries and has the same
    /// sign as `dy` or is zero.
    pub fn scroll_vertically_by(&mut self, dy: i32) -> Result<i32, FocusListError> {
        if self.needs_layout {
            self.on_layout()?;
        }
        if self.window.is_empty() {
            return Ok(0);
        }

        let scrolled = if dy < 0 {
            self.scroll_down_vertically_by(dy)
        } else if dy > 0 {
            self.scroll_up_vertically_by(dy)
        } else {
            0
        };

        self.recycle_views_out_of_bounds();
        self.notify_children_about_proximity(true)?;
        Ok(scrolled)
    }

    /// Content moves down, earlier items come in from the top.
    fn scroll_down_vertically_by(&mut self, dy: i32) -> i32 {
        let mut scrolled = 0;

        while scrolled > dy {
            let Some(child_top) = self.window.first_top() else {
                break;
            };

            if self.window.first_position == 0 {
                self.window.push_first_higher = false;
                let room = (self.geometry.top_view_max_top() - child_top).max(0);
                let scroll_by = (scrolled - dy).min(room);
                scrolled -= scroll_by;
                self.window.offset_children_vertical(scroll_by);
                break;
            }

            let room = (-child_top).max(0);
            let scroll_by = (scrolled - dy).min(room);
            scrolled -= scroll_by;
            self.window.offset_children_vertical(scroll_by);
            if scrolled <= dy {
                break;
            }

            self.window.first_position -= 1;
            let bottom = child_top + scroll_by;
            let placed = self.make_slot(self.window.first_position, bottom - self.item_height());
            self.window.prepend(placed);
        }

        scrolled
    }

    /// Content moves up, later items come in from the bottom.
    fn scroll_up_vertically_by(&mut self, dy: i32) -> i32 {
        let mut scrolled = 0;
        let item_count = self.provider.item_count();

        while scrolled < dy {
            let Some(child_bottom) = self.window.last_bottom() else {
                break;
            };

            if self.window.last_position() >= item_count {
                let room = (self.geometry.top_view_max_top() - child_bottom).min(0);
                let scroll_by = (scrolled - dy).max(room);
                scrolled -= scroll_by;
                self.window.offset_children_vertical(scroll_by);
                break;
            }

            let room = (child_bottom - self.geometry.height).max(0);
            let scroll_by = -(dy - scrolled).min(room);
            scrolled -= scroll_by;
            self.window.offset_children_vertical(scroll_by);
            if scrolled >= dy {
                break;
            }

            let top = child_bottom + scroll_by;
            let placed = self.make_slot(self.window.last_position(), top);
            self.window.append(placed);
        }

        scrolled
    }

    fn recycle_views_out_of_bounds(&mut self) {
        let released_top = self.window.recycle_out_of_bounds(
            &mut self.provider,
            &self.geometry,
            self.focused_position,
        );
        if released_top > 0 {
            log::trace!(
                "FocusList: recycled {released_top} slots from the top, first position now {}",
                self.window.first_position
            );
        }
    }

    /// Materializes `position` at `top`, spanning one item height.
    pub(crate) fn make_slot(&mut self, position: usize, top: i32) -> PlacedSlot<P::Slot> {
        let slot = self.provider.materialize(position);
        PlacedSlot::new(
            slot,
            position,
            self.geometry.content_left(),
            top,
            self.geometry.content_right(),
            self.item_height(),
        )
    }
}

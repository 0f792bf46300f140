//! Taps on the list.
//!
//! A single tap anywhere over a slot activates the central item, not the one
//! under the finger. The pressed state is released after a short delay on
//! the engine's deferred queue.

use std::rc::Rc;

use super::error::FocusListError;
use super::item_provider::ItemProvider;
use super::layout_manager::FocusLayoutManager;

/// Press feedback for the central item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapEvent {
    /// The central item was clicked. The hotspot is relative to the slot's
    /// top-left corner.
    Pressed {
        position: Option<usize>,
        slot: usize,
        hotspot_x: i32,
        hotspot_y: i32,
    },
    Released { position: Option<usize> },
}

impl<P: ItemProvider> FocusLayoutManager<P> {
    pub fn add_tap_listener(&mut self, listener: Rc<dyn Fn(&TapEvent)>) -> u64 {
        self.tap_listeners.add(listener)
    }

    pub fn remove_tap_listener(&mut self, id: u64) -> bool {
        self.tap_listeners.remove(id)
    }

    /// Handles a single tap at `(x, y)` in viewport coordinates.
    ///
    /// Returns the window slot index that was clicked, or `None` when no slot
    /// lies under the point and the tap is not consumed.
    pub fn on_single_tap_up(&mut self, x: i32, y: i32) -> Result<Option<usize>, FocusListError> {
        if !self.window.bounds().any(|bounds| bounds.contains(x, y)) {
            return Ok(None);
        }

        let central_slot = self.central_slot()?;
        let bounds = self
            .window
            .get(central_slot)
            .map(|placed| placed.bounds())
            .ok_or(FocusListError::SlotIndexOutOfRange {
                index: central_slot,
                materialized: self.window.len(),
            })?;

        if let Some(token) = self.pending_release.take() {
            self.deferred.run_now(token);
        }

        self.tap_listeners.notify(&TapEvent::Pressed {
            position: bounds.position,
            slot: central_slot,
            hotspot_x: x - bounds.left,
            hotspot_y: y - bounds.top,
        });

        let listeners = self.tap_listeners.snapshot();
        let released = TapEvent::Released {
            position: bounds.position,
        };
        let token = self.deferred.schedule(
            self.frame_time_nanos,
            self.config.press_release_delay_millis,
            move || {
                for listener in &listeners {
                    listener(&released);
                }
            },
        );
        self.pending_release = Some(token);
        Ok(Some(central_slot))
    }
}

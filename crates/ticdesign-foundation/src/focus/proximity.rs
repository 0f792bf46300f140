//! Proximity notifications.
//!
//! After every layout pass and every scroll step, listeners get one batched
//! event describing which slot is central and where every slot sits, so item
//! views can scale or fade by their distance from the center.

use std::rc::Rc;

use smallvec::SmallVec;

use super::error::FocusListError;
use super::item_provider::ItemProvider;
use super::layout_manager::FocusLayoutManager;
use super::slot::SlotBounds;

/// Inline capacity for the per-event slot snapshot. The window usually holds
/// three or four slots.
pub type SmallSlotVec = SmallVec<[SlotBounds; 4]>;

/// One batched proximity notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ProximityEvent {
    /// Window slot index of the central slot.
    pub central_slot: usize,
    /// Adapter position of the central slot.
    pub central_position: Option<usize>,
    /// Viewport center the distances are measured against.
    pub center_y: i32,
    /// Every materialized slot, top to bottom.
    pub slots: SmallSlotVec,
    /// Whether listeners should animate toward the new state.
    pub animate: bool,
}

impl ProximityEvent {
    /// Signed distance of each slot's center from the viewport center.
    pub fn distances(&self) -> impl Iterator<Item = (Option<usize>, i32)> + '_ {
        self.slots
            .iter()
            .map(move |bounds| (bounds.position, bounds.center_y() - self.center_y))
    }
}

impl<P: ItemProvider> FocusLayoutManager<P> {
    /// Registers a proximity listener; returns an id for removal.
    pub fn add_proximity_listener(&mut self, listener: Rc<dyn Fn(&ProximityEvent)>) -> u64 {
        self.proximity_listeners.add(listener)
    }

    pub fn remove_proximity_listener(&mut self, id: u64) -> bool {
        self.proximity_listeners.remove(id)
    }

    pub(crate) fn notify_children_about_proximity(
        &mut self,
        animate: bool,
    ) -> Result<(), FocusListError> {
        let central_slot = self.central_slot()?;
        let central_position = self.window.get(central_slot).and_then(|p| p.position());
        self.last_central_position = central_position;
        if self.proximity_listeners.is_empty() {
            return Ok(());
        }
        let event = ProximityEvent {
            central_slot,
            central_position,
            center_y: self.geometry.center_y(),
            slots: self.window.bounds().collect(),
            animate,
        };
        self.proximity_listeners.notify(&event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::test_helpers::{laid_out_manager, record_proximity};

    #[test]
    fn layout_emits_one_unanimated_event() {
        let mut manager = laid_out_manager(10);
        let events = record_proximity(&mut manager);

        manager.request_layout();
        manager.on_layout().expect("layout");

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert!(!event.animate);
        assert_eq!(event.central_position, Some(0));
        assert_eq!(event.slots.len(), 2);
        let distances: Vec<_> = event.distances().collect();
        assert_eq!(distances, vec![(Some(0), 1), (Some(1), 102)]);
    }

    #[test]
    fn scroll_emits_animated_event() {
        let mut manager = laid_out_manager(10);
        let events = record_proximity(&mut manager);

        manager.scroll_vertically_by(40).expect("scroll");

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!(events[0].animate);
    }

    #[test]
    fn removed_listener_stops_receiving() {
        let mut manager = laid_out_manager(10);
        let hits = Rc::new(std::cell::Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = manager.add_proximity_listener(Rc::new(move |_: &ProximityEvent| {
            counter.set(counter.get() + 1)
        }));
        manager.scroll_vertically_by(10).expect("scroll");
        assert!(manager.remove_proximity_listener(id));
        manager.scroll_vertically_by(10).expect("scroll");
        assert_eq!(hits.get(), 1);
    }
}

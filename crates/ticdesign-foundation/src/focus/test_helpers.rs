//! Test helpers for driving the focus list without a host view.

use std::cell::RefCell;
use std::rc::Rc;

use super::item_provider::ItemProvider;
use super::layout_manager::FocusLayoutManager;
use super::proximity::ProximityEvent;
use super::geometry::ViewportGeometry;

/// Provider whose slots are their own adapter positions, recording every
/// materialize and release call.
#[derive(Debug, Default)]
pub struct RecordingProvider {
    item_count: usize,
    materialized: Vec<usize>,
    released: Vec<usize>,
}

impl RecordingProvider {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    pub fn materialized(&self) -> Vec<usize> {
        self.materialized.clone()
    }

    pub fn released(&self) -> Vec<usize> {
        self.released.clone()
    }

    /// Slots handed out and not yet returned.
    pub fn outstanding(&self) -> usize {
        self.materialized.len() - self.released.len()
    }
}

impl ItemProvider for RecordingProvider {
    type Slot = usize;

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn materialize(&mut self, position: usize) -> usize {
        self.materialized.push(position);
        position
    }

    fn release(&mut self, slot: usize) {
        self.released.push(slot);
    }
}

/// A 200x300 list of `item_count` items (item height 101), laid out once.
pub fn laid_out_manager(item_count: usize) -> FocusLayoutManager<RecordingProvider> {
    let mut manager = FocusLayoutManager::new(
        RecordingProvider::new(item_count),
        ViewportGeometry::new(200, 300),
    );
    manager.on_layout().expect("initial layout");
    manager
}

/// Collects every proximity event the manager emits.
pub fn record_proximity(
    manager: &mut FocusLayoutManager<RecordingProvider>,
) -> Rc<RefCell<Vec<ProximityEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    manager.add_proximity_listener(Rc::new(move |event: &ProximityEvent| {
        sink.borrow_mut().push(event.clone());
    }));
    events
}

/// Adapter positions of the materialized window, top to bottom.
pub fn window_positions(manager: &FocusLayoutManager<RecordingProvider>) -> Vec<Option<usize>> {
    manager.slots().map(|bounds| bounds.position).collect()
}

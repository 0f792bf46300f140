use crate::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use ticdesign_animation::NANOS_PER_MILLI;

const FRAME_NANOS: u64 = 16 * NANOS_PER_MILLI;

// Mock item source handing out labelled slots
struct LabelProvider {
    labels: Vec<String>,
    live: usize,
}

impl LabelProvider {
    fn new(count: usize) -> Self {
        Self {
            labels: (0..count).map(|i| format!("item {i}")).collect(),
            live: 0,
        }
    }
}

impl ItemProvider for LabelProvider {
    type Slot = String;

    fn item_count(&self) -> usize {
        self.labels.len()
    }

    fn materialize(&mut self, position: usize) -> String {
        self.live += 1;
        self.labels[position].clone()
    }

    fn release(&mut self, _slot: String) {
        self.live -= 1;
    }
}

fn list(count: usize) -> FocusLayoutManager<LabelProvider> {
    let mut manager =
        FocusLayoutManager::new(LabelProvider::new(count), ViewportGeometry::new(240, 300));
    manager.on_frame(0).expect("initial frame");
    manager
}

/// Feeds frames until the engine has nothing left to animate.
fn settle(manager: &mut FocusLayoutManager<LabelProvider>, mut now: u64) -> u64 {
    for _ in 0..5_000 {
        if !manager.has_pending_work() {
            return now;
        }
        now += FRAME_NANOS;
        manager.on_frame(now).expect("frame");
    }
    panic!("list never came to rest");
}

fn assert_window_is_consistent(manager: &FocusLayoutManager<LabelProvider>) {
    let bounds: Vec<_> = manager.slots().collect();
    assert!(!bounds.is_empty());
    assert!(bounds.len() <= 4, "too many slots: {}", bounds.len());
    assert!(manager.last_position() <= manager.provider().item_count());
    for (i, b) in bounds.iter().enumerate() {
        assert_eq!(b.position, Some(manager.first_position() + i));
        assert_eq!(b.height(), manager.item_height());
    }
    for pair in bounds.windows(2) {
        assert_eq!(pair[0].bottom, pair[1].top);
    }
    assert_eq!(manager.provider().live, bounds.len());
    for (placed, b) in manager.window().iter().zip(&bounds) {
        assert_eq!(placed.slot(), &format!("item {}", b.position.unwrap_or(usize::MAX)));
    }
}

#[test]
fn initial_layout_scenario() {
    let manager = list(10);
    assert_eq!(manager.item_height(), 101);
    assert_eq!(manager.centered_top(), 101);
    assert_eq!(manager.first_position(), 0);
    assert_eq!(manager.central_index(), Ok(Some(0)));
    assert_window_is_consistent(&manager);
}

#[test]
fn drag_down_from_rest_is_clamped() {
    let mut manager = list(10);
    assert_eq!(manager.scroll_vertically_by(-500), Ok(0));
    assert_window_is_consistent(&manager);
}

#[test]
fn arbitrary_drags_keep_the_window_consistent() {
    let mut manager = list(25);
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..400 {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let delta = ((seed >> 33) % 1_201) as i32 - 600;

        let scrolled = manager.scroll_vertically_by(delta).expect("scroll");

        assert!(scrolled.abs() <= delta.abs());
        assert!(scrolled == 0 || scrolled.signum() == delta.signum());
        assert_window_is_consistent(&manager);
    }
}

#[test]
fn scroll_to_position_round_trip() {
    let mut manager = list(12);
    for position in 0..12 {
        manager.scroll_to_position(position);
        manager.on_frame(0).expect("layout frame");
        assert_eq!(manager.central_index(), Ok(Some(position)));
        assert_eq!(manager.offset_to_center(), Ok(0));
        assert_window_is_consistent(&manager);
    }
}

#[test]
fn smooth_scroll_reaches_distant_targets_both_ways() {
    let mut manager = list(50);

    manager.smooth_scroll_to_position(30).expect("smooth scroll");
    let now = settle(&mut manager, 0);
    assert_eq!(manager.central_index(), Ok(Some(30)));
    assert_eq!(manager.offset_to_center(), Ok(0));
    assert_eq!(manager.scroll_state(), ScrollState::Idle);
    assert_window_is_consistent(&manager);

    manager.smooth_scroll_to_position(2).expect("smooth scroll");
    settle(&mut manager, now);
    assert_eq!(manager.central_index(), Ok(Some(2)));
    assert_eq!(manager.offset_to_center(), Ok(0));
    assert_window_is_consistent(&manager);
}

#[test]
fn smooth_scroll_after_a_jump_targets_the_new_window() {
    let mut manager = list(50);
    manager.scroll_to_position(20);
    manager.smooth_scroll_to_position(1).expect("smooth scroll");

    settle(&mut manager, 0);

    assert_eq!(manager.central_index(), Ok(Some(1)));
    assert_eq!(manager.offset_to_center(), Ok(0));
    assert_window_is_consistent(&manager);
}

#[test]
fn animate_to_center_is_idempotent() {
    let mut manager = list(10);
    manager.scroll_vertically_by(170).expect("scroll");
    assert_ne!(manager.offset_to_center(), Ok(0));

    manager.animate_to_center().expect("first snap");
    settle(&mut manager, 0);
    let snapped: Vec<_> = manager.slots().collect();
    assert_eq!(manager.offset_to_center(), Ok(0));

    manager.animate_to_center().expect("second snap");
    assert!(!manager.is_smooth_scrolling());
    let again: Vec<_> = manager.slots().collect();
    assert_eq!(snapped, again);
}

#[test]
fn proximity_follows_the_centered_item() {
    let mut manager = list(10);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    manager.add_proximity_listener(Rc::new(move |event: &ProximityEvent| {
        sink.borrow_mut()
            .push((event.central_position, event.animate))
    }));

    manager.scroll_to_position(6);
    manager.on_frame(0).expect("layout frame");
    manager.scroll_vertically_by(30).expect("scroll");

    assert_eq!(*seen.borrow(), vec![(Some(6), false), (Some(6), true)]);
    assert_eq!(manager.last_central_position(), Some(6));
}

#[test]
fn boxed_providers_work_behind_the_trait() {
    let provider: Box<dyn ItemProvider<Slot = String>> = Box::new(LabelProvider::new(3));
    let mut manager = FocusLayoutManager::new(provider, ViewportGeometry::new(240, 300));
    manager.on_layout().expect("layout");
    assert_eq!(manager.scroll_vertically_by(1_000), Ok(303));
    assert_eq!(manager.last_position(), 3);
}

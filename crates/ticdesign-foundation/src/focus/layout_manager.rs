//! The focus list engine.
//!
//! [`FocusLayoutManager`] owns the window of materialized slots and exposes
//! the host-facing operations: layout, scroll deltas, scroll state changes,
//! data-set notifications and frame ticks. The actual algorithms live in the
//! sibling modules as further `impl` blocks on the same type.

use ticdesign_animation::{CancelToken, DeferredQueue};

use super::centering::{CenterFinder, NearestCenterFinder};
use super::config::FocusListConfig;
use super::error::FocusListError;
use super::geometry::ViewportGeometry;
use super::item_provider::ItemProvider;
use super::listeners::ListenerRegistry;
use super::proximity::ProximityEvent;
use super::slot::SlotBounds;
use super::smooth_scroll::{CenteringSmoothScroller, ScrollAnimation, SmoothScroller};
use super::tap::TapEvent;
use super::window::Window;

/// Scroll state as reported by the host, or entered by the engine itself
/// while it runs a smooth scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Idle,
    /// The user is dragging the content.
    Dragging,
    /// Content is moving without user input.
    Settling,
}

/// Capability interface for hosts that drive the engine without knowing its
/// concrete type.
pub trait LayoutEngine {
    fn on_layout(&mut self) -> Result<(), FocusListError>;

    /// Applies a scroll delta and returns the distance actually scrolled.
    fn on_scroll(&mut self, delta: i32) -> Result<i32, FocusListError>;

    /// Scrolling came to rest.
    fn on_idle(&mut self) -> Result<(), FocusListError>;
}

/// Focus-centered virtualized list engine.
///
/// Items are all `item_height()` tall; the item whose slot sits nearest the
/// middle of the padded content box is the focus item, and the list snaps it to the
/// centered slot whenever scrolling comes to rest.
pub struct FocusLayoutManager<P: ItemProvider> {
    pub(crate) provider: P,
    pub(crate) geometry: ViewportGeometry,
    pub(crate) config: FocusListConfig,
    pub(crate) window: Window<P::Slot>,
    pub(crate) center_finder: Box<dyn CenterFinder>,
    pub(crate) default_scroller: CenteringSmoothScroller,
    pub(crate) custom_scroller: Option<Box<dyn SmoothScroller>>,
    pub(crate) animation: Option<ScrollAnimation>,
    pub(crate) scroll_state: ScrollState,
    pub(crate) needs_layout: bool,
    /// Adapter position that holds input focus; its slot is never recycled.
    pub(crate) focused_position: Option<usize>,
    pub(crate) proximity_listeners: ListenerRegistry<ProximityEvent>,
    pub(crate) tap_listeners: ListenerRegistry<TapEvent>,
    pub(crate) deferred: DeferredQueue,
    pub(crate) pending_release: Option<CancelToken>,
    /// Timestamp of the most recent frame.
    pub(crate) frame_time_nanos: u64,
    pub(crate) last_central_position: Option<usize>,
}

impl<P: ItemProvider> FocusLayoutManager<P> {
    pub fn new(provider: P, geometry: ViewportGeometry) -> Self {
        Self::with_config(provider, geometry, FocusListConfig::default())
    }

    pub fn with_config(provider: P, geometry: ViewportGeometry, config: FocusListConfig) -> Self {
        Self {
            provider,
            geometry,
            default_scroller: CenteringSmoothScroller::from_config(&config),
            config,
            window: Window::default(),
            center_finder: Box::new(NearestCenterFinder),
            custom_scroller: None,
            animation: None,
            scroll_state: ScrollState::Idle,
            needs_layout: true,
            focused_position: None,
            proximity_listeners: ListenerRegistry::default(),
            tap_listeners: ListenerRegistry::default(),
            deferred: DeferredQueue::new(),
            pending_release: None,
            frame_time_nanos: 0,
            last_central_position: None,
        }
    }

    /// Replaces the oracle that decides which slot is central.
    pub fn set_center_finder(&mut self, finder: Box<dyn CenterFinder>) {
        self.center_finder = finder;
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    /// Updates the viewport. A changed viewport is laid out again.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        if self.geometry != geometry {
            log::debug!(
                "FocusList: viewport {}x{} -> {}x{}",
                self.geometry.width,
                self.geometry.height,
                geometry.width,
                geometry.height
            );
            self.geometry = geometry;
            self.request_layout();
        }
    }

    pub fn config(&self) -> &FocusListConfig {
        &self.config
    }

    pub fn item_height(&self) -> i32 {
        self.geometry.item_height()
    }

    pub fn centered_top(&self) -> i32 {
        self.geometry.centered_top()
    }

    pub fn first_position(&self) -> usize {
        self.window.first_position()
    }

    /// One past the last materialized adapter position.
    pub fn last_position(&self) -> usize {
        self.window.last_position()
    }

    /// Bounds of every materialized slot, top to bottom.
    pub fn slots(&self) -> impl Iterator<Item = SlotBounds> + '_ {
        self.window.bounds()
    }

    pub fn window(&self) -> &Window<P::Slot> {
        &self.window
    }

    /// Central adapter position as of the last layout or scroll step.
    pub fn last_central_position(&self) -> Option<usize> {
        self.last_central_position
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Host scroll state notification.
    ///
    /// A drag interrupts any running smooth scroll. Coming to rest snaps the
    /// central item to the center when `snap_on_idle` is set.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) -> Result<(), FocusListError> {
        let previous = std::mem::replace(&mut self.scroll_state, state);
        match state {
            ScrollState::Dragging => self.stop_smooth_scroll(),
            ScrollState::Idle if previous != ScrollState::Idle && self.config.snap_on_idle => {
                self.animate_to_center()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Scrolling came to rest: snap the central item to the center.
    pub fn on_scroll_idle(&mut self) -> Result<(), FocusListError> {
        self.scroll_state = ScrollState::Idle;
        self.animate_to_center()
    }

    /// Schedules a layout pass for the next frame.
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Jumps so that `position` lands in the centered slot on the next layout.
    ///
    /// Out-of-range positions are clamped to the last item.
    pub fn scroll_to_position(&mut self, position: usize) {
        self.stop_smooth_scroll();
        self.scroll_state = ScrollState::Idle;

        let item_count = self.provider.item_count();
        let position = position.min(item_count.saturating_sub(1));
        if position > 0 {
            self.window.first_position = position - 1;
            self.window.push_first_higher = true;
        } else {
            self.window.first_position = 0;
            self.window.push_first_higher = false;
        }
        self.window.use_old_top = false;
        self.request_layout();
    }

    /// Swaps the item source. Every slot goes back to the old provider, which
    /// is returned, and the list starts over at position 0.
    pub fn on_adapter_replaced(&mut self, provider: P) -> P {
        self.stop_smooth_scroll();
        self.scroll_state = ScrollState::Idle;
        if let Some(token) = self.pending_release.take() {
            self.deferred.run_now(token);
        }
        self.window.reset(&mut self.provider);
        self.focused_position = None;
        self.last_central_position = None;
        log::debug!(
            "FocusList: adapter replaced, {} items",
            provider.item_count()
        );
        self.request_layout();
        std::mem::replace(&mut self.provider, provider)
    }

    pub fn on_items_inserted(&mut self, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.window.positions_inserted(start, count);
        if let Some(focused) = self.focused_position {
            if focused >= start {
                self.focused_position = Some(focused + count);
            }
        }
        self.request_layout();
    }

    pub fn on_items_removed(&mut self, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.window.positions_removed(start, count);
        if let Some(focused) = self.focused_position {
            self.focused_position = if focused >= start + count {
                Some(focused - count)
            } else if focused >= start {
                None
            } else {
                Some(focused)
            };
        }
        self.request_layout();
    }

    pub fn on_items_moved(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        self.window.position_moved(from, to);
        if self.focused_position == Some(from) {
            self.focused_position = Some(to);
        }
        self.request_layout();
    }

    /// Item contents changed without moving.
    pub fn on_items_changed(&mut self, _start: usize, _count: usize) {
        self.request_layout();
    }

    /// Marks the adapter position that holds input focus.
    pub fn set_focused_position(&mut self, position: Option<usize>) {
        self.focused_position = position;
    }

    pub fn focused_position(&self) -> Option<usize> {
        self.focused_position
    }

    /// Scroll offset of the content, for scroll bars.
    pub fn compute_vertical_scroll_offset(&self) -> i32 {
        let Some(first) = self.window.get(0) else {
            return 0;
        };
        let position = first.position().unwrap_or(self.window.first_position);
        i32::try_from(position)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.item_height())
            .saturating_sub(first.top())
    }

    /// Frame tick: runs due deferred tasks, a pending layout, then advances
    /// the running smooth scroll.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Result<(), FocusListError> {
        self.frame_time_nanos = frame_time_nanos;
        self.deferred.run_due(frame_time_nanos);
        if self.needs_layout {
            self.on_layout()?;
        }
        self.step_animation(frame_time_nanos)
    }

    /// Whether anything still needs frames: an animation or a deferred task.
    pub fn has_pending_work(&self) -> bool {
        self.animation.is_some() || !self.deferred.is_empty() || self.needs_layout
    }
}

impl<P: ItemProvider> LayoutEngine for FocusLayoutManager<P> {
    fn on_layout(&mut self) -> Result<(), FocusListError> {
        FocusLayoutManager::on_layout(self)
    }

    fn on_scroll(&mut self, delta: i32) -> Result<i32, FocusListError> {
        self.scroll_vertically_by(delta)
    }

    fn on_idle(&mut self) -> Result<(), FocusListError> {
        self.on_scroll_idle()
    }
}

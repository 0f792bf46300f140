//! Smooth scrolling toward a target position.
//!
//! A target that is not materialized yet is approached at constant speed in
//! its direction ("seeking"). Once the target slot shows up in the window the
//! scroll switches to a decelerating animation that lands the item in the
//! middle of the viewport.

use ticdesign_animation::{Easing, ScrollTween};

use super::config::FocusListConfig;
use super::item_provider::ItemProvider;
use super::layout_manager::{FocusLayoutManager, ScrollState};
use super::FocusListError;

/// Distance of one seek chunk while the target is not materialized.
pub const TARGET_SEEK_SCROLL_DISTANCE_PX: i32 = 10_000;

/// Seek chunks run this much slower than the nominal speed.
pub const TARGET_SEEK_EXTRA_SCROLL_RATIO: f32 = 1.2;

/// Deceleration takes this fraction of a linear scroll's distance per unit time.
const DECELERATION_TIME_RATIO: f32 = 0.3356;

/// Which way a smooth scroll travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward lower adapter positions (content moves down).
    Backward,
    /// Toward higher adapter positions (content moves up).
    Forward,
}

impl ScrollDirection {
    /// Unit scroll vector along the vertical axis.
    pub fn vector(self) -> i32 {
        match self {
            ScrollDirection::Backward => -1,
            ScrollDirection::Forward => 1,
        }
    }
}

/// Speed and snapping policy for smooth scrolls.
pub trait SmoothScroller {
    fn milliseconds_per_pixel(&self) -> f32;

    /// Direction to travel toward `target` given the first materialized position.
    fn scroll_direction(&self, target: usize, first_position: usize) -> ScrollDirection {
        if target < first_position {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Forward
        }
    }

    /// Offset that moves the view `[view_start, view_end]` to the middle of
    /// the box `[box_start, box_end]`.
    fn dt_to_fit(&self, view_start: i32, view_end: i32, box_start: i32, box_end: i32) -> i32 {
        (box_start + box_end) / 2 - (view_start + view_end) / 2
    }

    fn time_for_scrolling(&self, distance: i32) -> u64 {
        (distance.unsigned_abs() as f32 * self.milliseconds_per_pixel()).ceil() as u64
    }

    fn time_for_deceleration(&self, distance: i32) -> u64 {
        (self.time_for_scrolling(distance) as f32 / DECELERATION_TIME_RATIO).ceil() as u64
    }
}

/// Default scroller: constant perceptual speed across display densities,
/// centering the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteringSmoothScroller {
    milliseconds_per_pixel: f32,
}

impl CenteringSmoothScroller {
    pub fn new(milliseconds_per_inch: f32, density_dpi: f32) -> Self {
        Self::from_config(&FocusListConfig {
            milliseconds_per_inch,
            density_dpi,
            ..Default::default()
        })
    }

    pub fn from_config(config: &FocusListConfig) -> Self {
        Self {
            milliseconds_per_pixel: config.milliseconds_per_pixel(),
        }
    }
}

impl SmoothScroller for CenteringSmoothScroller {
    fn milliseconds_per_pixel(&self) -> f32 {
        self.milliseconds_per_pixel
    }
}

/// The engine-driven animation currently running, if any.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ScrollAnimation {
    /// Plain scroll-by (snap to center, host `smooth_scroll_by`).
    By(ScrollTween),
    /// Constant-speed travel toward a target that is not materialized yet.
    Seek { target: usize, tween: ScrollTween },
    /// Final decelerating approach that centers a materialized target.
    Settle { target: usize, tween: ScrollTween },
}

impl ScrollAnimation {
    pub(crate) fn target(&self) -> Option<usize> {
        match self {
            ScrollAnimation::By(_) => None,
            ScrollAnimation::Seek { target, .. } | ScrollAnimation::Settle { target, .. } => {
                Some(*target)
            }
        }
    }
}

impl<P: ItemProvider> FocusLayoutManager<P> {
    /// Replaces the smooth scroller used for targeted scrolls.
    pub fn set_custom_smooth_scroller(&mut self, scroller: Box<dyn SmoothScroller>) {
        self.custom_scroller = Some(scroller);
    }

    /// Goes back to the default centering scroller.
    pub fn clear_custom_smooth_scroller(&mut self) {
        self.custom_scroller = None;
    }

    fn scroller(&self) -> &dyn SmoothScroller {
        match &self.custom_scroller {
            Some(custom) => custom.as_ref(),
            None => &self.default_scroller,
        }
    }

    /// Target of the running smooth scroll, if it is a targeted one.
    pub fn smooth_scroll_target(&self) -> Option<usize> {
        self.animation.as_ref().and_then(ScrollAnimation::target)
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Animates a scroll of `dy` pixels (positive moves content up).
    pub fn smooth_scroll_by(&mut self, dy: i32) {
        self.stop_smooth_scroll();
        if dy == 0 {
            return;
        }
        self.animation = Some(ScrollAnimation::By(ScrollTween::scroll_by(
            dy,
            self.geometry.height,
        )));
        self.scroll_state = ScrollState::Settling;
    }

    /// Animates until `position` sits in the center. Supersedes any running
    /// smooth scroll.
    ///
    /// A pending layout runs first, so the target is resolved against the
    /// window the animation will actually move.
    pub fn smooth_scroll_to_position(&mut self, position: usize) -> Result<(), FocusListError> {
        self.stop_smooth_scroll();
        if self.needs_layout {
            self.on_layout()?;
        }
        let item_count = self.provider.item_count();
        if item_count == 0 || self.window.is_empty() {
            return Ok(());
        }
        let target = position.min(item_count - 1);
        if !self.start_settle(target) {
            self.start_seek(target);
        }
        self.scroll_state = ScrollState::Settling;
        Ok(())
    }

    /// Drops the running animation without any notification.
    pub(crate) fn stop_smooth_scroll(&mut self) {
        if let Some(animation) = self.animation.take() {
            log::debug!("FocusList: smooth scroll {:?} superseded", animation.target());
        }
    }

    fn start_seek(&mut self, target: usize) {
        let scroller = self.scroller();
        let direction = scroller.scroll_direction(target, self.window.first_position());
        let duration = (scroller.time_for_scrolling(TARGET_SEEK_SCROLL_DISTANCE_PX) as f32
            * TARGET_SEEK_EXTRA_SCROLL_RATIO) as u64;
        self.animation = Some(ScrollAnimation::Seek {
            target,
            tween: ScrollTween::new(
                TARGET_SEEK_SCROLL_DISTANCE_PX * direction.vector(),
                duration,
                Easing::Linear,
            ),
        });
    }

    /// Starts the centering approach if `target` is materialized.
    fn start_settle(&mut self, target: usize) -> bool {
        let Some(bounds) = self
            .window
            .index_of(target)
            .and_then(|index| self.window.get(index))
            .map(|placed| placed.bounds())
        else {
            return false;
        };
        let scroller = self.scroller();
        let dt = scroller.dt_to_fit(
            bounds.top,
            bounds.bottom,
            self.geometry.padding_top(),
            self.geometry.height - self.geometry.padding_bottom(),
        );
        let duration = scroller.time_for_deceleration(dt);
        log::debug!("FocusList: target {target} found, settling by {}", -dt);
        self.animation = Some(ScrollAnimation::Settle {
            target,
            tween: ScrollTween::new(-dt, duration, Easing::Decelerate),
        });
        true
    }

    /// Advances the running animation to `frame_time_nanos`.
    pub(crate) fn step_animation(&mut self, frame_time_nanos: u64) -> Result<(), FocusListError> {
        let Some(mut animation) = self.animation.take() else {
            return Ok(());
        };

        match &mut animation {
            ScrollAnimation::By(tween) | ScrollAnimation::Settle { tween, .. } => {
                let delta = tween.step(frame_time_nanos);
                if delta != 0 && self.scroll_vertically_by(delta)? != delta {
                    tween.abort();
                }
                if tween.is_finished() {
                    return self.finish_animation();
                }
            }
            ScrollAnimation::Seek { target, tween } => {
                let target = *target;
                let delta = tween.step(frame_time_nanos);
                let moved = if delta != 0 {
                    self.scroll_vertically_by(delta)?
                } else {
                    0
                };
                if self.start_settle(target) {
                    return Ok(());
                }
                if delta != 0 && moved == 0 {
                    log::debug!("FocusList: target {target} unreachable, abandoning");
                    return self.finish_animation();
                }
                if tween.is_finished() {
                    self.start_seek(target);
                    return Ok(());
                }
            }
        }

        self.animation = Some(animation);
        Ok(())
    }

    fn finish_animation(&mut self) -> Result<(), FocusListError> {
        self.animation = None;
        self.on_scroll_state_changed(ScrollState::Idle)
    }
}

//! Frame-driven tween over an integer pixel distance.

use crate::{Easing, NANOS_PER_MILLI};

/// Maximum duration for a programmatic scroll-by, in milliseconds.
pub const MAX_SCROLL_DURATION_MILLIS: u64 = 2000;

/// Animates a fixed pixel distance over a duration.
///
/// The tween is anchored at the first frame it sees; each call to
/// [`ScrollTween::step`] returns the whole-pixel delta to apply since the
/// previous call, so the deltas of a finished tween always sum to
/// [`ScrollTween::distance`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTween {
    distance: i32,
    duration_millis: u64,
    easing: Easing,
    start_time_nanos: Option<u64>,
    consumed: i32,
    finished: bool,
}

impl ScrollTween {
    pub fn new(distance: i32, duration_millis: u64, easing: Easing) -> Self {
        Self {
            distance,
            duration_millis,
            easing,
            start_time_nanos: None,
            consumed: 0,
            finished: distance == 0,
        }
    }

    /// Tween for a scroll-by whose duration grows with the distance relative
    /// to the container, capped at [`MAX_SCROLL_DURATION_MILLIS`].
    pub fn scroll_by(distance: i32, container_size: i32) -> Self {
        let container = container_size.max(1) as f32;
        let millis = ((distance.unsigned_abs() as f32 / container + 1.0) * 300.0) as u64;
        Self::new(
            distance,
            millis.min(MAX_SCROLL_DURATION_MILLIS),
            Easing::QuinticOut,
        )
    }

    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Pixels applied so far.
    pub fn consumed(&self) -> i32 {
        self.consumed
    }

    /// Pixels still to be applied.
    pub fn remaining(&self) -> i32 {
        self.distance - self.consumed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the tween to `frame_time_nanos` and returns the delta to apply.
    pub fn step(&mut self, frame_time_nanos: u64) -> i32 {
        if self.finished {
            return 0;
        }

        let start = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let linear_progress = if self.duration_millis == 0 {
            1.0
        } else {
            let elapsed = frame_time_nanos.saturating_sub(start);
            let duration_nanos = self.duration_millis * NANOS_PER_MILLI;
            (elapsed as f64 / duration_nanos as f64).clamp(0.0, 1.0) as f32
        };

        let target = if linear_progress >= 1.0 {
            self.finished = true;
            self.distance
        } else {
            (self.distance as f32 * self.easing.transform(linear_progress)).round() as i32
        };

        let delta = target - self.consumed;
        self.consumed = target;
        delta
    }

    /// Marks the tween finished without applying the rest of the distance.
    ///
    /// Used when the scrolled content refuses to move any further.
    pub fn abort(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;

//! Animation primitives for ticDesign.
//!
//! Everything here is driven by frame timestamps supplied by the host, so the
//! types stay single-threaded and deterministic:
//! - [`Easing`] - interpolation curves for time-based animations
//! - [`ScrollTween`] - an integer-distance tween that hands out per-frame deltas
//! - [`DeferredQueue`] - one-shot tasks fired after a delay on the same thread

mod deferred;
mod easing;
mod tween;

pub use deferred::*;
pub use easing::*;
pub use tween::*;

/// Nanoseconds per millisecond, for converting frame times.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

//! Easing curves for time-based animations.

/// Maps a linear time fraction in `[0, 1]` to an animation progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing; progress equals elapsed time.
    Linear,
    /// `1 - (1 - t)^2`. Used when a smooth scroll settles on its target.
    Decelerate,
    /// `(t - 1)^5 + 1`. The curve list views use for programmatic scroll-by.
    QuinticOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::QuinticOut
    }
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => fraction,
            Easing::Decelerate => 1.0 - (1.0 - fraction) * (1.0 - fraction),
            Easing::QuinticOut => {
                let t = fraction - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

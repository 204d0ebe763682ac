//! Easing functions mapping normalized time to normalized progress.
//!
//! All functions clamp their input to `[0, 1]` and return a value in `[0, 1]`.
//! They are the only curves the demo uses:
//!
//! | Curve | Used by |
//! |---|---|
//! | [`ease_out_cubic`] | Confidence ramp, swipe tilt |
//! | [`ease_in_out_cubic`] | Rotate spins |
//! | [`linear`] | Pulse profiles |
//!
//! # Example
//!
//! ```
//! use gesture_ring::motion::{ease_out_cubic, Easing};
//!
//! assert_eq!(ease_out_cubic(0.5), 0.875);
//! assert_eq!(Easing::InOutCubic.apply(0.5), 0.5);
//! ```

/// `1 - (1 - t)^3`: fast start, gentle landing.
///
/// # Parameters
///
/// * `t` - Normalized time, clamped to `[0, 1]`
///
/// # Returns
///
/// Progress in `[0, 1]`, monotonically non-decreasing in `t`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Cubic acceleration up to the midpoint, mirrored deceleration after it.
///
/// `4t^3` below `0.5`, `1 - (-2t + 2)^3 / 2` from `0.5` on. The curve is
/// point-symmetric around `(0.5, 0.5)`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Identity on `[0, 1]`.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Named easing curve, so tweens stay `Copy` and comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// [`linear`].
    #[default]
    Linear,
    /// [`ease_out_cubic`].
    OutCubic,
    /// [`ease_in_out_cubic`].
    InOutCubic,
}

impl Easing {
    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => linear(t),
            Self::OutCubic => ease_out_cubic(t),
            Self::InOutCubic => ease_in_out_cubic(t),
        }
    }
}

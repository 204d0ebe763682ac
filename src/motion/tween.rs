//! Single-value tweens.
//!
//! A [`Tween`] interpolates one number from `from` to `to` over a fixed
//! duration. It holds no callbacks; the [`Scheduler`](super::Scheduler) samples
//! it once per frame and hands the value to whoever owns the animated property.
//!
//! # Profiles
//!
//! - [`Profile::Eased`]: ends on `to`
//! - [`Profile::Pulse`]: peaks at `to` halfway, ends on `from`
//! - [`Profile::Arc`]: a half sine, peaks at `to` halfway, ends on `from`
//! - [`Profile::Hop`]: like `Arc`, but lands on a separate value
//!
//! # Example
//!
//! ```
//! use gesture_ring::motion::{Easing, Tween};
//! use std::time::Duration;
//!
//! let tween = Tween::eased(0.0, 100.0, Duration::ZERO, Duration::from_millis(500), Easing::Linear);
//! let sample = tween.sample(Duration::from_millis(250)).unwrap();
//! assert_eq!(sample.value, 50.0);
//! assert!(!sample.finished);
//! ```

use super::easing::Easing;
use std::time::Duration;

/// Shape of a tween over its progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profile {
    /// `from + (to - from) * easing(p)`.
    Eased(Easing),

    /// Linear rise to `to` during the first half, linear fall back to `from`
    /// during the second half.
    Pulse,

    /// `from + sin(pi * p) * (to - from)`: a hop that lands where it started.
    Arc,

    /// A hop from `from` that peaks at `to` halfway and lands on `land`.
    ///
    /// `from + (land - from) * p + sin(pi * p) * (to - (from + land) / 2)`.
    /// With `land == from` this is [`Profile::Arc`]. Used to restart a jump
    /// from mid-air without snapping back to the ground first.
    Hop {
        /// Value reported on the final tick.
        land: f64,
    },
}

/// Value produced by one tick of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    /// Interpolated value at the sampled time.
    pub value: f64,
    /// Set on the tick where progress reaches 1. Reported exactly once.
    pub finished: bool,
}

/// Transient interpolation state, owned by the scheduler entry that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Value at progress 0.
    pub from: f64,
    /// Final value for eased tweens, peak value for the other profiles.
    pub to: f64,
    /// Session offset at which the tween begins.
    pub start: Duration,
    /// Length of the tween. Zero completes on the first tick.
    pub duration: Duration,
    /// Shape of the interpolation.
    pub profile: Profile,
}

impl Tween {
    /// Creates a tween with an explicit profile.
    #[must_use]
    pub const fn new(from: f64, to: f64, start: Duration, duration: Duration, profile: Profile) -> Self {
        Self { from, to, start, duration, profile }
    }

    /// Eased tween, the common case.
    #[must_use]
    pub const fn eased(from: f64, to: f64, start: Duration, duration: Duration, easing: Easing) -> Self {
        Self::new(from, to, start, duration, Profile::Eased(easing))
    }

    /// Time at which progress reaches 1.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// Normalized progress at `now`, clamped to `[0, 1]`.
    ///
    /// A zero-length tween is complete as soon as it has started.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.start);
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Value of the profile at a given progress.
    ///
    /// With `p` the clamped progress and `d = to - from`:
    ///
    /// | Profile | Value |
    /// |---|---|
    /// | `Eased(e)` | `from + d * e(p)` |
    /// | `Pulse` | linear up to `to` at `p = 0.5`, then back to `from` |
    /// | `Arc` | `from + d * sin(πp)` |
    /// | `Hop { land }` | line from `from` to `land`, plus `sin(πp) * (to - (from + land) / 2)` |
    #[must_use]
    pub fn value_at(&self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        let span = self.to - self.from;
        match self.profile {
            Profile::Eased(easing) => self.from + span * easing.apply(p),
            Profile::Pulse => {
                if p < 0.5 {
                    self.from + span * (p * 2.0)
                } else {
                    self.to - span * ((p - 0.5) * 2.0)
                }
            }
            Profile::Arc => self.from + (std::f64::consts::PI * p).sin() * span,
            Profile::Hop { land } => {
                let midpoint = (self.from + land) / 2.0;
                self.from + (land - self.from) * p + (std::f64::consts::PI * p).sin() * (self.to - midpoint)
            }
        }
    }

    /// Samples the tween at `now`.
    ///
    /// # Parameters
    ///
    /// * `now` - Session offset to sample at
    ///
    /// # Returns
    ///
    /// `None` before the start time. Otherwise the value at `now`, with
    /// `finished` set once progress reaches 1. The final sample carries the
    /// exact end value of the profile. The caller drops the tween after the
    /// first sample with `finished == true`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> Option<TweenSample> {
        if now < self.start {
            return None;
        }
        let progress = self.progress(now);
        let finished = progress >= 1.0;
        let value = match (finished, self.profile) {
            // Arc and Pulse land exactly on their origin; avoid sin(pi) residue.
            (true, Profile::Arc | Profile::Pulse) => self.from,
            (true, Profile::Hop { land }) => land,
            (true, Profile::Eased(_)) => self.to,
            _ => self.value_at(progress),
        };
        Some(TweenSample { value, finished })
    }

    /// The same motion played backwards, beginning at `start`.
    #[must_use]
    pub const fn reversed(&self, start: Duration) -> Self {
        Self { from: self.to, to: self.from, start, duration: self.duration, profile: self.profile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn nothing_before_start() {
        let tween = Tween::eased(0.0, 10.0, ms(100), ms(500), Easing::Linear);
        assert!(tween.sample(ms(50)).is_none());
        assert_eq!(tween.sample(ms(100)).unwrap().value, 0.0);
    }

    #[test]
    fn linear_midpoint_and_finish() {
        let tween = Tween::eased(0.0, 10.0, ms(0), ms(500), Easing::Linear);
        let mid = tween.sample(ms(250)).unwrap();
        assert!((mid.value - 5.0).abs() < 1e-9);
        assert!(!mid.finished);

        let end = tween.sample(ms(900)).unwrap();
        assert_eq!(end.value, 10.0);
        assert!(end.finished);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::eased(3.0, 7.0, ms(10), Duration::ZERO, Easing::OutCubic);
        let sample = tween.sample(ms(10)).unwrap();
        assert!(sample.finished);
        assert_eq!(sample.value, 7.0);
    }

    #[test]
    fn pulse_peaks_halfway_and_returns() {
        let tween = Tween::new(0.3, 0.8, ms(0), ms(300), Profile::Pulse);
        assert!((tween.sample(ms(150)).unwrap().value - 0.8).abs() < 1e-9);
        assert!((tween.sample(ms(75)).unwrap().value - 0.55).abs() < 1e-9);
        assert_eq!(tween.sample(ms(300)).unwrap().value, 0.3);
    }

    #[test]
    fn arc_reaches_amplitude_and_lands() {
        let tween = Tween::new(1.0, 1.5, ms(0), ms(400), Profile::Arc);
        assert!((tween.sample(ms(200)).unwrap().value - 1.5).abs() < 1e-9);
        let end = tween.sample(ms(400)).unwrap();
        assert!(end.finished);
        assert_eq!(end.value, 1.0);
    }

    #[test]
    fn hop_starts_mid_air_and_lands_below() {
        let tween = Tween::new(0.75, 0.75, ms(0), ms(400), Profile::Hop { land: 0.25 });
        assert_eq!(tween.sample(ms(0)).unwrap().value, 0.75);
        assert!((tween.sample(ms(200)).unwrap().value - 0.75).abs() < 1e-9);
        assert!(tween.sample(ms(300)).unwrap().value < 0.75);
        let end = tween.sample(ms(400)).unwrap();
        assert!(end.finished);
        assert_eq!(end.value, 0.25);
    }

    #[test]
    fn hop_landing_on_start_matches_arc() {
        let hop = Tween::new(1.0, 1.5, ms(0), ms(400), Profile::Hop { land: 1.0 });
        let arc = Tween::new(1.0, 1.5, ms(0), ms(400), Profile::Arc);
        for t in [0, 50, 100, 200, 333] {
            let (a, b) = (hop.sample(ms(t)).unwrap().value, arc.sample(ms(t)).unwrap().value);
            assert!((a - b).abs() < 1e-9, "differs at {t}ms");
        }
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let tween = Tween::eased(0.0, 1.0, ms(0), ms(500), Easing::OutCubic);
        let back = tween.reversed(ms(700));
        assert_eq!(back.from, 1.0);
        assert_eq!(back.to, 0.0);
        assert_eq!(back.end(), ms(1200));
    }
}

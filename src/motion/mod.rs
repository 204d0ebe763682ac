//! Time-based motion: easing curves, tweens, and the frame scheduler.
//!
//! - [`easing`]: Pure progress curves
//! - [`tween`]: Single-value interpolation with eased, pulse and arc profiles
//! - [`scheduler`]: Keyed ownership of live tweens and cancellable timers

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::{ease_in_out_cubic, ease_out_cubic, linear, Easing};
pub use scheduler::{Scheduler, TimerHandle, TweenUpdate};
pub use tween::{Profile, Tween, TweenSample};

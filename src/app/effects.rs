//! Visual effects and timing constants for gesture dispatch.
//!
//! Effects are plain tween registrations on the controller's scheduler. They
//! read the scene only to find the current value of the property they start
//! from; every later write goes through [`TweenUpdate`](crate::motion::TweenUpdate)s
//! applied by the controller.
//!
//! # Effects
//!
//! | Gesture | Hero ring | Live ring |
//! |---|---|---|
//! | Swipe | tilt Z by ±45°, hold, return | same |
//! | Tap | glow pulse to 0.8 over 300ms | jump 0.5 over 400ms |
//! | Rotate | half turn on Y over 1s | full turn on Y over 800ms |
//! | Idle | nothing | nothing |

use crate::domain::GestureKind;
use crate::motion::{Easing, Profile, Scheduler, Tween};
use crate::scene::{Property, SceneAdapter, SceneKind};
use std::f64::consts::{FRAC_PI_4, PI, TAU};
use std::time::Duration;

/// Confidence ramp length.
pub const CONFIDENCE_RAMP: Duration = Duration::from_millis(500);
/// Lower bound of the confidence target, inclusive.
pub const CONFIDENCE_MIN: f64 = 85.0;
/// Width of the confidence target range.
pub const CONFIDENCE_SPREAD: f64 = 15.0;

/// How long a gesture stays on display before returning to idle.
pub const GESTURE_RESET: Duration = Duration::from_millis(3000);
/// How long the response card stays highlighted.
pub const RESPONSE_ACTIVE: Duration = Duration::from_millis(2500);
/// Cross-fade between sections.
pub const SECTION_TRANSITION: Duration = Duration::from_millis(300);
/// Delay before the live scene is created after switching to the live view.
pub const LIVE_SCENE_INIT: Duration = Duration::from_millis(100);
/// Default landing cycle period.
pub const LANDING_CYCLE: Duration = Duration::from_millis(4000);

/// How long the live ring stays flashed after a gesture.
pub const FLASH_DURATION: Duration = Duration::from_millis(500);
/// Emissive intensity of the live ring while flashed.
pub const FLASH_EMISSIVE: f64 = 1.0;

/// Swipe tilt on rotation Z, in radians (45°).
pub const SWIPE_ANGLE: f64 = FRAC_PI_4;
/// Length of each swipe leg, out and back.
pub const SWIPE_DURATION: Duration = Duration::from_millis(500);
/// Hold between the two swipe legs.
pub const SWIPE_PAUSE: Duration = Duration::from_millis(200);

/// Peak glow opacity of a hero tap.
pub const GLOW_PEAK: f64 = 0.8;
/// Length of the hero glow pulse.
pub const GLOW_PULSE: Duration = Duration::from_millis(300);

/// Height of a live tap jump, in scene units.
pub const JUMP_HEIGHT: f64 = 0.5;
/// Length of a live tap jump.
pub const JUMP_DURATION: Duration = Duration::from_millis(400);

/// Length of the hero half turn.
pub const HERO_SPIN: Duration = Duration::from_millis(1000);
/// Length of the live full turn.
pub const LIVE_SPIN: Duration = Duration::from_millis(800);

/// A value the controller tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// Displayed gesture confidence, 0 to 100.
    Confidence,
    /// A numeric property of one of the scenes.
    Scene(SceneKind, Property),
}

/// Purpose of a one-shot timer. Each key has at most one pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Return the displayed gesture to idle.
    GestureReset,
    /// Drop the highlight from the response card.
    ResponseClear,
    /// Restore the live ring after a flash.
    RingFlash,
    /// Land a pending section transition.
    SectionTransition,
    /// Create the live scene for the live view.
    LiveSceneInit,
    /// Advance the landing gesture cycle.
    LandingCycle,
}

/// The scheduler the controller drives.
pub type EffectScheduler = Scheduler<TweenTarget, TimerKey>;

/// Registers the tweens for `gesture` on `scene`.
///
/// Each effect starts from the property's current value, so a gesture that
/// interrupts another one moves on smoothly. Effects that return to rest
/// (the swipe's reverse leg, the glow pulse, the landing of a jump) aim at the
/// scheduler's [`origin`](Scheduler::origin) for the property, the value it
/// had before the first of the overlapping effects.
///
/// # Parameters
///
/// * `scheduler` - Scheduler that receives the tweens
/// * `scene` - Scene to animate; only read for current property values
/// * `gesture` - Gesture to play. `Idle` plays nothing
///
/// # Tracing
///
/// Logs the effect at debug level with the scene kind.
pub fn play(scheduler: &mut EffectScheduler, scene: &dyn SceneAdapter, gesture: GestureKind) {
    let kind = scene.kind();
    let now = scheduler.now();

    if let Some(direction) = gesture.swipe_direction() {
        let target = TweenTarget::Scene(kind, Property::RotationZ);
        let current = scene.property(Property::RotationZ);
        let rest = scheduler.origin(target).unwrap_or(current);
        let tween = Tween::eased(current, rest + direction * SWIPE_ANGLE, now, SWIPE_DURATION, Easing::OutCubic);
        scheduler.start_tween_with_reverse(target, tween, SWIPE_PAUSE);
        tracing::debug!(scene = %kind, direction, "swipe effect");
        return;
    }

    match (gesture, kind) {
        (GestureKind::Tap, SceneKind::Hero) => {
            let target = TweenTarget::Scene(kind, Property::GlowOpacity);
            let base = scheduler.origin(target).unwrap_or_else(|| scene.property(Property::GlowOpacity));
            scheduler.start_tween(target, Tween::new(base, GLOW_PEAK, now, GLOW_PULSE, Profile::Pulse));
        }
        (GestureKind::Tap, SceneKind::Live) => {
            let target = TweenTarget::Scene(kind, Property::PositionY);
            let current = scene.property(Property::PositionY);
            let ground = scheduler.origin(target).unwrap_or(current);
            let jump = Tween::new(current, ground + JUMP_HEIGHT, now, JUMP_DURATION, Profile::Hop { land: ground });
            scheduler.start_tween(target, jump);
        }
        (GestureKind::Rotate, _) => {
            let (turn, duration) = match kind {
                SceneKind::Hero => (PI, HERO_SPIN),
                SceneKind::Live => (TAU, LIVE_SPIN),
            };
            let current = scene.property(Property::RotationY);
            scheduler.start_tween(
                TweenTarget::Scene(kind, Property::RotationY),
                Tween::eased(current, current + turn, now, duration, Easing::InOutCubic),
            );
        }
        _ => return,
    }
    tracing::debug!(scene = %kind, gesture = %gesture, "gesture effect");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{HeadlessScene, RingSpec};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn final_value(scheduler: &mut EffectScheduler, target: TweenTarget, at: Duration) -> Option<f64> {
        scheduler.set_now(at);
        scheduler
            .step_tweens()
            .into_iter()
            .find(|update| update.target == target)
            .map(|update| update.value)
    }

    #[test]
    fn swipe_left_tilts_and_returns() {
        let scene = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        let mut scheduler = EffectScheduler::new();
        play(&mut scheduler, &scene, GestureKind::SwipeLeft);

        let target = TweenTarget::Scene(SceneKind::Live, Property::RotationZ);
        let tilted = final_value(&mut scheduler, target, ms(500)).unwrap();
        assert!((tilted + FRAC_PI_4).abs() < 1e-9);
        assert_eq!(final_value(&mut scheduler, target, ms(1200)), Some(0.0));
        assert!(!scheduler.is_animating(target));
    }

    #[test]
    fn live_tap_jumps_and_lands_on_start() {
        let mut scene = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        scene.set_property(Property::PositionY, 0.25);
        let mut scheduler = EffectScheduler::new();
        play(&mut scheduler, &scene, GestureKind::Tap);

        let target = TweenTarget::Scene(SceneKind::Live, Property::PositionY);
        let peak = final_value(&mut scheduler, target, ms(200)).unwrap();
        assert!((peak - 0.75).abs() < 1e-9);
        assert_eq!(final_value(&mut scheduler, target, ms(400)), Some(0.25));
    }

    #[test]
    fn second_tap_mid_jump_continues_from_current_height() {
        let mut scene = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        let mut scheduler = EffectScheduler::new();
        let target = TweenTarget::Scene(SceneKind::Live, Property::PositionY);

        play(&mut scheduler, &scene, GestureKind::Tap);
        let peak = final_value(&mut scheduler, target, ms(200)).unwrap();
        scene.set_property(Property::PositionY, peak);

        play(&mut scheduler, &scene, GestureKind::Tap);
        let restarted = final_value(&mut scheduler, target, ms(200)).unwrap();
        assert!((restarted - peak).abs() < 1e-9, "snapped from {peak} to {restarted}");
        let next = final_value(&mut scheduler, target, ms(216)).unwrap();
        assert!((next - peak).abs() < 0.05, "jumped from {peak} to {next}");

        assert_eq!(final_value(&mut scheduler, target, ms(600)), Some(0.0));
        assert!(!scheduler.is_animating(target));
    }

    #[test]
    fn hero_tap_pulses_glow() {
        let scene = HeadlessScene::new(SceneKind::Hero, &RingSpec::hero());
        let mut scheduler = EffectScheduler::new();
        play(&mut scheduler, &scene, GestureKind::Tap);

        let target = TweenTarget::Scene(SceneKind::Hero, Property::GlowOpacity);
        let peak = final_value(&mut scheduler, target, ms(150)).unwrap();
        assert!((peak - GLOW_PEAK).abs() < 1e-9);
        assert_eq!(final_value(&mut scheduler, target, ms(300)), Some(0.3));
    }

    #[test]
    fn spins_differ_per_scene() {
        let hero = HeadlessScene::new(SceneKind::Hero, &RingSpec::hero());
        let live = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        let mut scheduler = EffectScheduler::new();
        play(&mut scheduler, &hero, GestureKind::Rotate);
        play(&mut scheduler, &live, GestureKind::Rotate);

        scheduler.set_now(ms(1000));
        let updates = scheduler.step_tweens();
        let hero_y = TweenTarget::Scene(SceneKind::Hero, Property::RotationY);
        let live_y = TweenTarget::Scene(SceneKind::Live, Property::RotationY);
        let value = |target| updates.iter().find(|u| u.target == target).map(|u| u.value);
        assert_eq!(value(hero_y), Some(PI));
        assert_eq!(value(live_y), Some(TAU));
    }

    #[test]
    fn idle_plays_nothing() {
        let scene = HeadlessScene::new(SceneKind::Live, &RingSpec::live());
        let mut scheduler = EffectScheduler::new();
        play(&mut scheduler, &scene, GestureKind::Idle);
        assert_eq!(scheduler.active_tweens(), 0);
    }
}

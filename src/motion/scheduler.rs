//! Frame-driven scheduler for tweens and one-shot timers.
//!
//! The scheduler is the cooperative "event loop" of the core. It owns every live
//! tween and every pending timer, and is advanced explicitly by the caller once
//! per frame:
//!
//! ```text
//! set_now(t) → take_due_timers() → (handle timers) → step_tweens() → (apply values)
//! ```
//!
//! # Ownership by key
//!
//! Tweens are keyed by the property they animate and timers by their purpose.
//! Starting a tween on a target that is already animating cancels the earlier
//! tween along with any pending reverse leg, and scheduling a timer under a key
//! that is already pending cancels the earlier timer. This is what keeps a
//! stale "reset to idle" from clobbering a newer gesture.
//!
//! # Example
//!
//! ```
//! use gesture_ring::motion::{Easing, Scheduler};
//! use std::time::Duration;
//!
//! let mut scheduler: Scheduler<&str, &str> = Scheduler::new();
//! scheduler.run_tween("opacity", 0.0, 1.0, Duration::from_millis(100), Easing::Linear);
//! scheduler.schedule("reset", Duration::from_millis(50));
//!
//! scheduler.set_now(Duration::from_millis(50));
//! assert_eq!(scheduler.take_due_timers(), vec!["reset"]);
//! let updates = scheduler.step_tweens();
//! assert!((updates[0].value - 0.5).abs() < 1e-9);
//! ```

use super::easing::Easing;
use super::tween::Tween;
use std::time::Duration;

/// Cancellation handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Value emitted for one animated target during [`Scheduler::step_tweens`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenUpdate<T> {
    /// Target the value belongs to.
    pub target: T,
    /// Value to write to the target.
    pub value: f64,
    /// The target is released: no further updates will follow.
    pub done: bool,
}

/// A live tween and what happens when it finishes.
#[derive(Debug, Clone)]
struct TweenEntry<T> {
    target: T,
    tween: Tween,
    /// Hold before the reverse leg back to `origin`. Taken when the leg starts.
    reverse_after: Option<Duration>,
    /// Resting value of the target before the first of a chain of replacements.
    origin: f64,
}

/// A pending one-shot timer.
#[derive(Debug, Clone)]
struct TimerEntry<K> {
    handle: TimerHandle,
    key: K,
    due: Duration,
}

/// Cooperative scheduler keyed by tween target `T` and timer key `K`.
///
/// Holds at most one tween per target and one timer per key. Time only moves
/// when the owner calls [`set_now`](Self::set_now); nothing runs on its own.
#[derive(Debug, Clone)]
pub struct Scheduler<T, K> {
    now: Duration,
    /// Registration order; also the order of [`step_tweens`](Self::step_tweens) updates.
    tweens: Vec<TweenEntry<T>>,
    timers: Vec<TimerEntry<K>>,
    /// Next timer handle. Doubles as the tie-breaker for equal due times.
    next_handle: u64,
}

impl<T, K> Default for Scheduler<T, K> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            tweens: Vec::new(),
            timers: Vec::new(),
            next_handle: 0,
        }
    }
}

impl<T: Copy + PartialEq, K: Copy + PartialEq> Scheduler<T, K> {
    /// Creates an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scheduler time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Advances the clock. Time never moves backwards; earlier values are ignored.
    pub fn set_now(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Registers a tween, cancelling any tween already animating `target`.
    ///
    /// The tween keeps the target's [`origin`](Self::origin) when it replaces
    /// one in flight, and otherwise takes `tween.from` as the origin.
    pub fn start_tween(&mut self, target: T, tween: Tween) {
        self.insert(target, tween, None);
    }

    /// Registers a tween that plays back to the target's origin `delay` after
    /// finishing.
    ///
    /// The origin is the value the target rested at before any in-flight tween
    /// on it started, so interrupting a swipe with another swipe still returns
    /// the ring to where it was at rest. The pending reverse leg keeps ownership
    /// of `target`; a new tween on the same target during the pause cancels it.
    ///
    /// # Parameters
    ///
    /// * `target` - Property the tween owns
    /// * `tween` - Forward leg
    /// * `delay` - Hold between the end of the forward leg and the start of
    ///   the reverse leg
    ///
    /// The reverse leg has the forward leg's duration and profile and runs
    /// from `tween.to` back to the origin.
    pub fn start_tween_with_reverse(&mut self, target: T, tween: Tween, delay: Duration) {
        self.insert(target, tween, Some(delay));
    }

    /// Starts an eased tween at the current time.
    ///
    /// # Parameters
    ///
    /// * `target` - Property the tween owns; an existing tween on it is cancelled
    /// * `from` - Value at the current time
    /// * `to` - Value after `duration`
    /// * `duration` - Length of the tween. Zero completes on the next step
    /// * `easing` - Progress curve
    ///
    /// # Example
    ///
    /// ```
    /// use gesture_ring::motion::{Easing, Scheduler};
    /// use std::time::Duration;
    ///
    /// let mut scheduler: Scheduler<u8, u8> = Scheduler::new();
    /// scheduler.run_tween(0, 0.0, 90.0, Duration::from_millis(500), Easing::OutCubic);
    /// scheduler.run_tween(0, 0.0, 10.0, Duration::ZERO, Easing::Linear);
    ///
    /// let updates = scheduler.step_tweens();
    /// assert_eq!(updates.len(), 1);
    /// assert_eq!(updates[0].value, 10.0);
    /// assert!(updates[0].done);
    /// ```
    pub fn run_tween(&mut self, target: T, from: f64, to: f64, duration: Duration, easing: Easing) {
        self.start_tween(target, Tween::eased(from, to, self.now, duration, easing));
    }

    /// Replaces any tween on `target`, carrying its origin over.
    fn insert(&mut self, target: T, tween: Tween, reverse_after: Option<Duration>) {
        let origin = self.origin(target).unwrap_or(tween.from);
        if self.cancel_tween(target) {
            tracing::trace!(origin, "replaced in-flight tween");
        }
        self.tweens.push(TweenEntry { target, tween, reverse_after, origin });
    }

    /// Resting value of `target` if a tween currently owns it.
    ///
    /// This is the `from` of the first tween in a chain of replacements, so
    /// effects can aim relative to where the target rests rather than where
    /// an interrupted tween left it.
    #[must_use]
    pub fn origin(&self, target: T) -> Option<f64> {
        self.tweens
            .iter()
            .find(|entry| entry.target == target)
            .map(|entry| entry.origin)
    }

    /// Cancels the tween on `target`. Returns whether one was active.
    pub fn cancel_tween(&mut self, target: T) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|entry| entry.target != target);
        self.tweens.len() != before
    }

    /// Whether a tween (or its pending reverse leg) owns `target`.
    #[must_use]
    pub fn is_animating(&self, target: T) -> bool {
        self.tweens.iter().any(|entry| entry.target == target)
    }

    /// Number of live tweens.
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Schedules `key` to fire `delay` from now, replacing a pending timer with
    /// the same key.
    ///
    /// # Parameters
    ///
    /// * `key` - Purpose of the timer
    /// * `delay` - Time from [`now`](Self::now) until the timer is due
    ///
    /// # Returns
    ///
    /// A handle for [`cancel`](Self::cancel). Handles are never reused, so a
    /// handle to a replaced timer cancels nothing.
    pub fn schedule(&mut self, key: K, delay: Duration) -> TimerHandle {
        self.cancel_key(key);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.push(TimerEntry { handle, key, due: self.now + delay });
        handle
    }

    /// Cancels a timer by handle. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.handle != handle);
        self.timers.len() != before
    }

    /// Cancels the pending timer for `key`, if any.
    pub fn cancel_key(&mut self, key: K) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.key != key);
        self.timers.len() != before
    }

    /// Whether a timer for `key` is waiting to fire.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.timers.iter().any(|timer| timer.key == key)
    }

    /// Removes and returns every timer due at the current time.
    ///
    /// # Returns
    ///
    /// The keys of the due timers, ordered by due time and then by scheduling
    /// order. A timer is due when its due time is at or before
    /// [`now`](Self::now). Each timer is returned once.
    pub fn take_due_timers(&mut self) -> Vec<K> {
        let now = self.now;
        let mut due: Vec<TimerEntry<K>> = Vec::new();
        self.timers.retain(|timer| {
            if timer.due <= now {
                due.push(timer.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.handle.cmp(&b.handle)));
        due.into_iter().map(|timer| timer.key).collect()
    }

    /// Samples every live tween at the current time, in registration order.
    ///
    /// Finished tweens are dropped, or swapped for their reverse leg when one
    /// was requested.
    ///
    /// # Returns
    ///
    /// One update per tween that has started. Tweens whose start time lies in
    /// the future, including reverse legs during their hold, report nothing.
    /// The update with `done == true` is the last one for its target.
    pub fn step_tweens(&mut self) -> Vec<TweenUpdate<T>> {
        let now = self.now;
        let mut updates = Vec::with_capacity(self.tweens.len());
        let mut finished = Vec::new();

        for (index, entry) in self.tweens.iter_mut().enumerate() {
            let Some(sample) = entry.tween.sample(now) else {
                continue;
            };
            if !sample.finished {
                updates.push(TweenUpdate { target: entry.target, value: sample.value, done: false });
                continue;
            }
            match entry.reverse_after.take() {
                Some(delay) => {
                    let reverse_start = entry.tween.end() + delay;
                    entry.tween = Tween::new(
                        entry.tween.to,
                        entry.origin,
                        reverse_start,
                        entry.tween.duration,
                        entry.tween.profile,
                    );
                    updates.push(TweenUpdate { target: entry.target, value: sample.value, done: false });
                }
                None => {
                    updates.push(TweenUpdate { target: entry.target, value: sample.value, done: true });
                    finished.push(index);
                }
            }
        }

        for index in finished.into_iter().rev() {
            self.tweens.remove(index);
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::tween::Profile;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Target {
        A,
        B,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Reset,
        Clear,
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn scheduler() -> Scheduler<Target, Key> {
        Scheduler::new()
    }

    #[test]
    fn completion_is_reported_once() {
        let mut s = scheduler();
        s.run_tween(Target::A, 0.0, 1.0, ms(100), Easing::Linear);

        s.set_now(ms(100));
        let updates = s.step_tweens();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].done);
        assert_eq!(updates[0].value, 1.0);

        s.set_now(ms(200));
        assert!(s.step_tweens().is_empty());
        assert!(!s.is_animating(Target::A));
    }

    #[test]
    fn new_tween_cancels_previous_on_same_target() {
        let mut s = scheduler();
        s.run_tween(Target::A, 0.0, 10.0, ms(100), Easing::Linear);
        s.run_tween(Target::B, 0.0, 1.0, ms(100), Easing::Linear);
        s.set_now(ms(50));
        s.run_tween(Target::A, 100.0, 200.0, ms(100), Easing::Linear);

        assert_eq!(s.active_tweens(), 2);
        let updates = s.step_tweens();
        let a: Vec<_> = updates.iter().filter(|u| u.target == Target::A).collect();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].value, 100.0);
        // Registration order: B was registered before the replacement A.
        assert_eq!(updates[0].target, Target::B);
    }

    #[test]
    fn reverse_leg_waits_then_returns() {
        let mut s = scheduler();
        let tween = Tween::eased(0.0, 1.0, ms(0), ms(500), Easing::OutCubic);
        s.start_tween_with_reverse(Target::A, tween, ms(200));

        s.set_now(ms(500));
        let forward_end = s.step_tweens();
        assert_eq!(forward_end[0].value, 1.0);
        assert!(!forward_end[0].done);

        s.set_now(ms(600));
        assert!(s.step_tweens().is_empty(), "paused between legs");
        assert!(s.is_animating(Target::A));

        s.set_now(ms(1200));
        let back = s.step_tweens();
        assert_eq!(back[0].value, 0.0);
        assert!(back[0].done);
        assert!(!s.is_animating(Target::A));
    }

    #[test]
    fn new_tween_during_pause_drops_reverse_leg() {
        let mut s = scheduler();
        let tween = Tween::eased(0.0, 1.0, ms(0), ms(100), Easing::Linear);
        s.start_tween_with_reverse(Target::A, tween, ms(200));
        s.set_now(ms(100));
        s.step_tweens();

        s.set_now(ms(150));
        s.start_tween(Target::A, Tween::new(1.0, 2.0, ms(150), ms(100), Profile::Pulse));
        s.set_now(ms(400));
        let updates = s.step_tweens();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].value, 1.0);
        assert!(updates[0].done);
    }

    #[test]
    fn interrupted_swipe_returns_to_rest() {
        let mut s = scheduler();
        s.start_tween_with_reverse(Target::A, Tween::eased(0.0, 1.0, ms(0), ms(100), Easing::Linear), ms(0));
        s.set_now(ms(50));
        s.step_tweens();
        assert_eq!(s.origin(Target::A), Some(0.0));

        s.start_tween_with_reverse(Target::A, Tween::eased(0.5, -1.0, ms(50), ms(100), Easing::Linear), ms(0));
        assert_eq!(s.origin(Target::A), Some(0.0));

        s.set_now(ms(150));
        assert_eq!(s.step_tweens()[0].value, -1.0);
        s.set_now(ms(250));
        let back = s.step_tweens();
        assert_eq!(back[0].value, 0.0);
        assert!(back[0].done);
    }

    #[test]
    fn rescheduling_a_key_cancels_the_stale_timer() {
        let mut s = scheduler();
        s.schedule(Key::Reset, ms(3000));
        s.set_now(ms(2000));
        s.schedule(Key::Reset, ms(3000));

        s.set_now(ms(3000));
        assert!(s.take_due_timers().is_empty());
        s.set_now(ms(5000));
        assert_eq!(s.take_due_timers(), vec![Key::Reset]);
    }

    #[test]
    fn cancel_by_handle() {
        let mut s = scheduler();
        let handle = s.schedule(Key::Clear, ms(10));
        assert!(s.cancel(handle));
        assert!(!s.cancel(handle));
        s.set_now(ms(20));
        assert!(s.take_due_timers().is_empty());
    }

    #[test]
    fn due_timers_fire_in_due_order() {
        let mut s = scheduler();
        s.schedule(Key::Reset, ms(30));
        s.schedule(Key::Clear, ms(10));
        s.set_now(ms(40));
        assert_eq!(s.take_due_timers(), vec![Key::Clear, Key::Reset]);
    }

    #[test]
    fn clock_is_monotonic() {
        let mut s = scheduler();
        s.set_now(ms(100));
        s.set_now(ms(50));
        assert_eq!(s.now(), ms(100));
    }
}

//! Event handling and the controller that owns the demo.
//!
//! [`Controller`] is the single owner of the [`AppState`], the scheduler, the
//! scenes and the random source. The presentation layer feeds it [`Event`]s and
//! gets back whether to re-render plus a list of [`Action`]s, the same
//! contract as an event handler over a plain state record.
//!
//! # Frame order
//!
//! `Event::Frame { now }` advances the session clock to `now` and then:
//!
//! 1. fires due timers, in due order
//! 2. steps tweens in registration order and writes their values
//! 3. applies ambient motion to properties no tween owns
//! 4. renders each existing scene once
//!
//! # Example
//!
//! ```
//! use gesture_ring::app::{AppState, Controller, ControllerOptions, Event, ViewName};
//! use gesture_ring::domain::GestureKind;
//! use gesture_ring::scene::HeadlessFactory;
//! use gesture_ring::ui::Theme;
//! use std::time::Duration;
//!
//! let state = AppState::new(Theme::default(), "media", ViewName::live());
//! let mut controller = Controller::new(state, HeadlessFactory::new(), ControllerOptions::default());
//!
//! controller.handle_event(&Event::SimulateGesture(GestureKind::Rotate))?;
//! controller.handle_event(&Event::Frame { now: Duration::from_millis(500) })?;
//!
//! let card = controller.state().response.unwrap();
//! assert_eq!(card.mapping.label, "Volume Changed");
//! assert!(controller.state().confidence >= 85.0);
//! # Ok::<(), gesture_ring::domain::GestureRingError>(())
//! ```

use super::effects::{self, EffectScheduler, TimerKey, TweenTarget};
use super::modes::{Section, ViewName};
use super::session::SessionDump;
use super::timeline::TimelineEntry;
use super::{Action, AppState};
use crate::domain::{lookup_label, GestureKind, GestureRingError, Result};
use crate::motion::{Easing, TweenUpdate};
use crate::scene::{Property, Rgb, RingSpec, SceneAdapter, SceneFactory, SceneKind, SceneSnapshot};
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Inputs from the presentation layer and the frame clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Leave the landing section for the main interface.
    EnterExperience,
    /// Return to the landing section.
    BackToLanding,
    /// Dispatch a simulated gesture.
    SimulateGesture(GestureKind),
    /// Select a tab of the main section.
    SwitchView(String),
    /// Select a context by label. Unknown labels behave like `general`.
    SwitchContext(String),
    /// Advance to session offset `now`.
    Frame { now: Duration },
    /// Stop the session.
    Quit,
}

/// Knobs the controller reads at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Seed for the confidence values. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Landing cycle period, `None` to disable the cycle.
    pub landing_cycle: Option<Duration>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            seed: None,
            landing_cycle: Some(effects::LANDING_CYCLE),
        }
    }
}

/// Handler output: whether the view changed, and side effects to perform.
pub type HandlerOutcome = (bool, Vec<Action>);

/// Per-frame increment of the hero ambient phase.
const AMBIENT_PHASE_STEP: f64 = 0.01;
/// Per-frame hero spin around Y, in radians.
const HERO_SPIN_STEP: f64 = 0.01;
const LIVE_SPIN_STEP: f64 = 0.005;
const PARTICLE_SPIN_STEP: f64 = -0.002;

/// Owner of the session: state, scheduler, scenes and random source.
///
/// Generic over the [`SceneFactory`] so tests can count created scenes. The
/// hero scene exists from construction; the live scene is created the first
/// time the main section or the live view needs it, and then kept.
#[derive(Debug)]
pub struct Controller<F: SceneFactory> {
    state: AppState,
    scheduler: EffectScheduler,
    factory: F,
    hero: Box<dyn SceneAdapter>,
    live: Option<Box<dyn SceneAdapter>>,
    live_rest: (Rgb, f64),
    rng: StdRng,
    landing_cycle: Option<Duration>,
    cycle_index: usize,
    ambient_phase: f64,
}

impl<F: SceneFactory> Controller<F> {
    /// Creates the controller and the hero scene, and starts the landing cycle.
    pub fn new(state: AppState, mut factory: F, options: ControllerOptions) -> Self {
        let hero = factory.create(SceneKind::Hero, &RingSpec::hero());
        let live_spec = RingSpec::live();
        let rng = options.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        let mut scheduler = EffectScheduler::new();
        if let Some(period) = options.landing_cycle {
            scheduler.schedule(TimerKey::LandingCycle, period);
        }
        tracing::debug!(
            context = %state.context_label,
            view = %state.view,
            landing_cycle = ?options.landing_cycle,
            "controller created"
        );

        Self {
            state,
            scheduler,
            factory,
            hero,
            live: None,
            live_rest: (live_spec.surface.color, live_spec.surface.emissive_intensity),
            rng,
            landing_cycle: options.landing_cycle,
            cycle_index: 0,
            ambient_phase: 0.0,
        }
    }

    /// Read-only view of the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The scene factory the controller creates scenes with.
    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Current session offset.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// The landing ring's scene.
    #[must_use]
    pub fn hero_scene(&self) -> &dyn SceneAdapter {
        self.hero.as_ref()
    }

    /// The live scene, once created.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::SceneNotInitialized`] before the main
    /// section or the live view has created it.
    pub fn live_scene(&self) -> Result<&dyn SceneAdapter> {
        self.live
            .as_deref()
            .ok_or(GestureRingError::SceneNotInitialized(SceneKind::Live))
    }

    /// Snapshot of the scene belonging to the visible section, if it exists.
    #[must_use]
    pub fn visible_snapshot(&self) -> Option<SceneSnapshot> {
        match self.state.visible_scene() {
            SceneKind::Hero => Some(SceneSnapshot::capture(self.hero.as_ref())),
            SceneKind::Live => self.live.as_deref().map(SceneSnapshot::capture),
        }
    }

    /// Captures the session for a JSON dump.
    ///
    /// The scene part is the visible section's scene, as in
    /// [`visible_snapshot`](Self::visible_snapshot).
    ///
    /// # Example
    ///
    /// ```
    /// use gesture_ring::app::{AppState, Controller, ControllerOptions, ViewName};
    /// use gesture_ring::domain::GestureKind;
    /// use gesture_ring::scene::HeadlessFactory;
    /// use gesture_ring::ui::Theme;
    ///
    /// let state = AppState::new(Theme::default(), "general", ViewName::live());
    /// let mut controller = Controller::new(state, HeadlessFactory::new(), ControllerOptions::default());
    /// controller.simulate_gesture(GestureKind::Tap);
    ///
    /// let json = controller.session_dump().to_json()?;
    /// assert!(json.contains("\"gesture\": \"tap\""));
    /// # Ok::<(), gesture_ring::domain::GestureRingError>(())
    /// ```
    #[must_use]
    pub fn session_dump(&self) -> SessionDump<'_> {
        SessionDump::new(&self.state, self.visible_snapshot())
    }

    /// Whether a timer with `key` is pending.
    #[must_use]
    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.scheduler.is_pending(key)
    }

    /// Whether a tween currently owns `target`.
    #[must_use]
    pub fn is_animating(&self, target: TweenTarget) -> bool {
        self.scheduler.is_animating(target)
    }

    /// Processes an event, mutates state, and returns render flag and actions.
    ///
    /// # Parameters
    ///
    /// * `event` - The event to process
    ///
    /// # Returns
    ///
    /// A tuple of `(should_render, actions)`:
    /// - `should_render`: Whether the view model changed
    /// - `actions`: Side effects for the presentation layer
    ///
    /// # Tracing
    ///
    /// Frames run inside a `frame` span at trace level; every other event gets
    /// a debug-level `handle_event` span carrying the event.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::InvalidViewName`] for a blank view name.
    /// Every other event is infallible; missing scenes are skipped.
    pub fn handle_event(&mut self, event: &Event) -> Result<HandlerOutcome> {
        let _span = match event {
            Event::Frame { .. } => tracing::trace_span!("frame"),
            _ => tracing::debug_span!("handle_event", event = ?event),
        }
        .entered();

        match event {
            Event::EnterExperience => Ok(self.enter_experience()),
            Event::BackToLanding => Ok(self.back_to_landing()),
            Event::SimulateGesture(gesture) => Ok(self.simulate_gesture(*gesture)),
            Event::SwitchView(name) => self.switch_view(name),
            Event::SwitchContext(label) => Ok(self.switch_context(label)),
            Event::Frame { now } => Ok(self.advance(*now)),
            Event::Quit => Ok((false, vec![Action::Quit])),
        }
    }

    /// Starts the cross-fade to the main section.
    pub fn enter_experience(&mut self) -> HandlerOutcome {
        self.begin_transition(Section::Main)
    }

    /// Starts the cross-fade back to the landing section.
    pub fn back_to_landing(&mut self) -> HandlerOutcome {
        self.begin_transition(Section::Landing)
    }

    /// Fades out the visible section and schedules the switch to `to`.
    ///
    /// Ignored while another transition is pending or when `to` is already
    /// shown.
    fn begin_transition(&mut self, to: Section) -> HandlerOutcome {
        if let Some(pending) = self.state.pending_section {
            tracing::debug!(%pending, requested = %to, "transition in flight, ignoring");
            return (false, vec![]);
        }
        if self.state.section == to {
            tracing::debug!(section = %to, "already in section");
            return (false, vec![]);
        }

        let from = self.state.section;
        self.state.pending_section = Some(to);
        self.scheduler.schedule(TimerKey::SectionTransition, effects::SECTION_TRANSITION);
        tracing::debug!(%from, %to, "section transition started");
        (true, vec![Action::FadeOut(from)])
    }

    /// Parses a gesture identifier and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::InvalidGestureKind`] for identifiers outside
    /// the gesture set; state is left untouched.
    pub fn simulate_gesture_named(&mut self, name: &str) -> Result<HandlerOutcome> {
        let gesture = name.parse::<GestureKind>()?;
        Ok(self.simulate_gesture(gesture))
    }

    /// Dispatches a gesture: confidence ramp, live ring effect, response card,
    /// timeline entry and a fresh return-to-idle timer.
    ///
    /// Dispatching [`GestureKind::Idle`] only returns to idle: the pending
    /// reset and the confidence ramp are cancelled and nothing is recorded.
    ///
    /// # Parameters
    ///
    /// * `gesture` - The gesture to dispatch
    ///
    /// # Returns
    ///
    /// `(true, [])`. The state always changes; a missing live scene only skips
    /// the ring effect.
    ///
    /// # Tracing
    ///
    /// Runs in a debug-level `dispatch` span with the gesture identifier and
    /// logs the drawn confidence target.
    pub fn simulate_gesture(&mut self, gesture: GestureKind) -> HandlerOutcome {
        let _span = tracing::debug_span!("dispatch", gesture = %gesture).entered();

        if gesture == GestureKind::Idle {
            self.scheduler.cancel_key(TimerKey::GestureReset);
            self.scheduler.cancel_tween(TweenTarget::Confidence);
            self.state.reset_gesture();
            tracing::debug!("returned to idle");
            return (true, vec![]);
        }

        self.state.current_gesture = gesture;
        self.state.confidence = 0.0;
        let target = self
            .rng
            .gen_range(effects::CONFIDENCE_MIN..effects::CONFIDENCE_MIN + effects::CONFIDENCE_SPREAD);
        self.scheduler
            .run_tween(TweenTarget::Confidence, 0.0, target, effects::CONFIDENCE_RAMP, Easing::OutCubic);

        match self.live.as_deref_mut() {
            Some(scene) => {
                scene.set_ring_color(Rgb::LAVENDER);
                scene.set_property(Property::EmissiveIntensity, effects::FLASH_EMISSIVE);
                self.scheduler.schedule(TimerKey::RingFlash, effects::FLASH_DURATION);
                effects::play(&mut self.scheduler, scene, gesture);
            }
            None => {
                let skipped = GestureRingError::SceneNotInitialized(SceneKind::Live);
                tracing::debug!(error = %skipped, "visual effect skipped");
            }
        }

        let mut action_label = String::new();
        if let Some(mapping) = lookup_label(&self.state.context_label, gesture) {
            self.state.show_response(mapping);
            self.scheduler.schedule(TimerKey::ResponseClear, effects::RESPONSE_ACTIVE);
            action_label = mapping.action.to_string();
        }

        self.state.timeline.push(TimelineEntry {
            timestamp: Local::now(),
            at: self.scheduler.now(),
            gesture,
            action_label,
        });

        self.scheduler.schedule(TimerKey::GestureReset, effects::GESTURE_RESET);
        tracing::debug!(confidence_target = target, context = %self.state.context_label, "gesture dispatched");
        (true, vec![])
    }

    /// Selects a view. The live view creates the live scene shortly after.
    ///
    /// Repeating the live view reschedules scene creation; the scene is still
    /// created at most once.
    ///
    /// # Parameters
    ///
    /// * `name` - View name; trimmed and lowercased
    ///
    /// # Returns
    ///
    /// `(true, [Action::ActivateTab(name)])` with the normalized name.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::InvalidViewName`] for a blank name.
    pub fn switch_view(&mut self, name: &str) -> Result<HandlerOutcome> {
        let view = ViewName::new(name)?;
        if view.is_live() {
            self.scheduler.schedule(TimerKey::LiveSceneInit, effects::LIVE_SCENE_INIT);
        }
        tracing::debug!(view = %view, "view switched");
        let action = Action::ActivateTab(view.to_string());
        self.state.view = view;
        Ok((true, vec![action]))
    }

    /// Stores a context label verbatim.
    pub fn switch_context(&mut self, label: &str) -> HandlerOutcome {
        self.state.context_label = label.to_string();
        tracing::debug!(context = label, "context switched");
        (true, vec![Action::ActivateContext(label.to_string())])
    }

    /// Runs one frame at session offset `now`.
    ///
    /// # Parameters
    ///
    /// * `now` - Session offset of this frame; earlier values are ignored
    ///
    /// # Returns
    ///
    /// `should_render` is set when a timer or tween touched the state (not
    /// the scenes). Actions carry section fades and scene creation.
    pub fn advance(&mut self, now: Duration) -> HandlerOutcome {
        self.scheduler.set_now(now);
        let mut actions = Vec::new();
        let mut should_render = false;

        for key in self.scheduler.take_due_timers() {
            tracing::debug!(timer = ?key, at = ?now, "timer fired");
            should_render |= self.on_timer(key, &mut actions);
        }

        for update in self.scheduler.step_tweens() {
            should_render |= self.apply(update);
        }

        self.ambient_motion();
        self.hero.render_frame();
        if let Some(live) = self.live.as_deref_mut() {
            live.render_frame();
        }

        (should_render, actions)
    }

    /// Handles a fired timer. Returns whether the state changed.
    fn on_timer(&mut self, key: TimerKey, actions: &mut Vec<Action>) -> bool {
        match key {
            TimerKey::GestureReset => {
                self.scheduler.cancel_tween(TweenTarget::Confidence);
                self.state.reset_gesture();
                true
            }
            TimerKey::ResponseClear => {
                self.state.clear_response_highlight();
                true
            }
            TimerKey::RingFlash => {
                if let Some(scene) = self.live.as_deref_mut() {
                    let (color, emissive) = self.live_rest;
                    scene.set_ring_color(color);
                    scene.set_property(Property::EmissiveIntensity, emissive);
                }
                false
            }
            TimerKey::SectionTransition => {
                let Some(section) = self.state.pending_section.take() else {
                    return false;
                };
                self.state.section = section;
                actions.push(Action::FadeIn(section));
                if section == Section::Main {
                    self.ensure_live_scene(actions);
                }
                tracing::debug!(%section, "section transition landed");
                true
            }
            TimerKey::LiveSceneInit => {
                self.ensure_live_scene(actions);
                false
            }
            TimerKey::LandingCycle => {
                if let Some(period) = self.landing_cycle {
                    self.scheduler.schedule(TimerKey::LandingCycle, period);
                }
                if self.state.section == Section::Landing {
                    self.advance_landing_cycle();
                }
                false
            }
        }
    }

    /// Plays the next gesture of [`GestureKind::LANDING_CYCLE`] on the hero
    /// ring. Only the scene moves; the state is not touched.
    fn advance_landing_cycle(&mut self) {
        let cycle = GestureKind::LANDING_CYCLE;
        self.cycle_index = (self.cycle_index + 1) % cycle.len();
        let gesture = cycle[self.cycle_index];
        tracing::trace!(gesture = %gesture, "landing cycle");
        effects::play(&mut self.scheduler, self.hero.as_ref(), gesture);
    }

    /// Creates the live scene unless it exists. Emits `SceneCreated` only on
    /// creation.
    fn ensure_live_scene(&mut self, actions: &mut Vec<Action>) {
        if self.live.is_some() {
            tracing::trace!("live scene already created");
            return;
        }
        self.live = Some(self.factory.create(SceneKind::Live, &RingSpec::live()));
        actions.push(Action::SceneCreated(SceneKind::Live));
        tracing::debug!("live scene created");
    }

    /// Writes one tween value to its target.
    ///
    /// # Returns
    ///
    /// Whether the state changed. Scene writes return `false`: scenes are
    /// redrawn on the ambient schedule anyway.
    fn apply(&mut self, update: TweenUpdate<TweenTarget>) -> bool {
        match update.target {
            TweenTarget::Confidence => {
                self.state.confidence = update.value;
                true
            }
            TweenTarget::Scene(SceneKind::Hero, property) => {
                self.hero.set_property(property, update.value);
                false
            }
            TweenTarget::Scene(SceneKind::Live, property) => {
                if let Some(scene) = self.live.as_deref_mut() {
                    scene.set_property(property, update.value);
                }
                false
            }
        }
    }

    /// Idle motion for one frame.
    ///
    /// # Hero
    ///
    /// - X rotation sways with `sin(t / 2) * 0.3`
    /// - Y rotation spins by [`HERO_SPIN_STEP`]
    /// - Glow opacity breathes around 0.2
    /// - The sensing zone scales around 1.0
    ///
    /// # Live
    ///
    /// Y rotation spins by `LIVE_SPIN_STEP`; the particle field turns the
    /// other way. Properties owned by a running tween are left alone.
    fn ambient_motion(&mut self) {
        self.ambient_phase += AMBIENT_PHASE_STEP;
        let t = self.ambient_phase;
        let free = |scheduler: &EffectScheduler, kind, property| !scheduler.is_animating(TweenTarget::Scene(kind, property));

        let hero = self.hero.as_mut();
        if free(&self.scheduler, SceneKind::Hero, Property::RotationX) {
            hero.set_property(Property::RotationX, (t * 0.5).sin() * 0.3);
        }
        if free(&self.scheduler, SceneKind::Hero, Property::RotationY) {
            let y = hero.property(Property::RotationY);
            hero.set_property(Property::RotationY, y + HERO_SPIN_STEP);
        }
        if free(&self.scheduler, SceneKind::Hero, Property::GlowOpacity) {
            hero.set_property(Property::GlowOpacity, 0.2 + (t * 2.0).sin() * 0.1);
        }
        if free(&self.scheduler, SceneKind::Hero, Property::ZoneScale) {
            hero.set_property(Property::ZoneScale, 1.0 + (t * 1.5).sin() * 0.05);
        }

        if let Some(live) = self.live.as_deref_mut() {
            if free(&self.scheduler, SceneKind::Live, Property::RotationY) {
                let y = live.property(Property::RotationY);
                live.set_property(Property::RotationY, y + LIVE_SPIN_STEP);
            }
            let particles = live.property(Property::ParticleRotationY);
            live.set_property(Property::ParticleRotationY, particles + PARTICLE_SPIN_STEP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::timeline::TIMELINE_CAPACITY;
    use crate::scene::HeadlessFactory;
    use crate::ui::Theme;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controller(context: &str) -> Controller<HeadlessFactory> {
        let state = AppState::new(Theme::default(), context, ViewName::live());
        let options = ControllerOptions { seed: Some(7), landing_cycle: None };
        Controller::new(state, HeadlessFactory::new(), options)
    }

    fn in_main(context: &str) -> Controller<HeadlessFactory> {
        let mut c = controller(context);
        c.enter_experience();
        c.advance(ms(300));
        c
    }

    #[test]
    fn confidence_ramps_into_range_then_resets() {
        let mut c = controller("presentation");
        c.simulate_gesture(GestureKind::Tap);
        c.advance(ms(250));
        let midway = c.state().confidence;
        c.advance(ms(500));
        let settled = c.state().confidence;
        assert!(midway > 0.0 && midway < settled);
        assert!((85.0..100.0).contains(&settled), "{settled}");

        c.advance(ms(2999));
        assert_eq!(c.state().current_gesture, GestureKind::Tap);
        c.advance(ms(3000));
        assert_eq!(c.state().current_gesture, GestureKind::Idle);
        assert_eq!(c.state().confidence, 0.0);
    }

    #[test]
    fn confidence_settles_in_range_for_every_seed() {
        for seed in 0..200 {
            let state = AppState::new(Theme::default(), "general", ViewName::live());
            let options = ControllerOptions { seed: Some(seed), landing_cycle: None };
            let mut c = Controller::new(state, HeadlessFactory::new(), options);
            c.simulate_gesture(GestureKind::Tap);
            c.advance(ms(500));
            let settled = c.state().confidence;
            assert!((85.0..100.0).contains(&settled), "seed {seed}: {settled}");
            assert!((85..=100).contains(&c.state().confidence_percent()));
        }
    }

    #[test]
    fn session_dump_shows_visible_scene() {
        let mut c = in_main("presentation");
        c.simulate_gesture(GestureKind::SwipeRight);
        let dump = c.session_dump();
        assert_eq!(dump.scene.map(|s| s.kind), Some(SceneKind::Live));
        assert_eq!(dump.timeline.len(), 1);
        assert_eq!(dump.response.map(|r| r.mapping.label), Some("Next Slide"));
    }

    #[test]
    fn newer_dispatch_cancels_stale_reset() {
        let mut c = controller("presentation");
        c.simulate_gesture(GestureKind::Tap);
        c.advance(ms(2000));
        c.simulate_gesture(GestureKind::Rotate);

        c.advance(ms(3000));
        assert_eq!(c.state().current_gesture, GestureKind::Rotate);
        assert!(c.state().confidence > 0.0);

        c.advance(ms(5000));
        assert_eq!(c.state().current_gesture, GestureKind::Idle);
        assert_eq!(c.state().confidence, 0.0);
    }

    #[test]
    fn idle_dispatch_returns_to_idle_without_side_effects() {
        let mut c = controller("presentation");
        c.simulate_gesture(GestureKind::Tap);
        c.advance(ms(100));
        c.simulate_gesture(GestureKind::Idle);

        assert_eq!(c.state().current_gesture, GestureKind::Idle);
        assert_eq!(c.state().confidence, 0.0);
        assert_eq!(c.state().timeline.len(), 1);
        assert!(!c.is_pending(TimerKey::GestureReset));
        c.advance(ms(400));
        assert_eq!(c.state().confidence, 0.0, "ramp cancelled");
    }

    #[test]
    fn timeline_keeps_ten_newest() {
        let mut c = controller("general");
        for (i, gesture) in GestureKind::ACTIONABLE.iter().cycle().take(11).enumerate() {
            c.advance(ms(i as u64 * 10));
            c.simulate_gesture(*gesture);
        }
        let timeline = &c.state().timeline;
        assert_eq!(timeline.len(), TIMELINE_CAPACITY);
        let newest = timeline.latest().unwrap();
        assert_eq!(newest.at, ms(100));
        assert_eq!(newest.gesture, GestureKind::Tap);
        assert!(timeline.iter().all(|entry| entry.at != ms(0)));
    }

    #[test]
    fn unmapped_context_falls_back_to_general() {
        let mut c = controller("kitchen");
        c.simulate_gesture(GestureKind::Tap);
        let card = c.state().response.unwrap();
        assert_eq!(card.mapping.label, "Tap Detected");
        assert_eq!(c.state().timeline.latest().unwrap().action_label, "Generic Select");
        assert_eq!(c.state().mode_label, "Kitchen");
    }

    #[test]
    fn response_highlight_expires() {
        let mut c = controller("presentation");
        c.simulate_gesture(GestureKind::SwipeRight);
        c.advance(ms(2499));
        assert!(c.state().response.unwrap().active);
        c.advance(ms(2500));
        assert!(!c.state().response.unwrap().active);
    }

    #[test]
    fn switch_view_live_creates_one_scene() {
        let mut c = controller("presentation");
        c.switch_view("live").unwrap();
        c.switch_view("live").unwrap();
        assert!(c.live_scene().is_err());

        let (_, actions) = c.advance(ms(100));
        assert_eq!(actions, vec![Action::SceneCreated(SceneKind::Live)]);
        c.switch_view("live").unwrap();
        c.advance(ms(300));
        assert_eq!(c.factory().created(SceneKind::Live), 1);
        assert!(c.live_scene().is_ok());
    }

    #[test]
    fn blank_view_is_rejected() {
        let mut c = controller("presentation");
        let err = c.handle_event(&Event::SwitchView(" ".to_string())).unwrap_err();
        assert!(matches!(err, GestureRingError::InvalidViewName(_)));
        assert!(c.state().view.is_live());
    }

    #[test]
    fn enter_is_delayed_and_not_reentrant() {
        let mut c = controller("presentation");
        let (_, actions) = c.enter_experience();
        assert_eq!(actions, vec![Action::FadeOut(Section::Landing)]);
        c.advance(ms(100));
        assert_eq!(c.enter_experience(), (false, vec![]));
        assert_eq!(c.back_to_landing(), (false, vec![]));
        assert_eq!(c.state().section, Section::Landing);

        let (render, actions) = c.advance(ms(300));
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::FadeIn(Section::Main), Action::SceneCreated(SceneKind::Live)]
        );
        assert_eq!(c.state().section, Section::Main);
        assert_eq!(c.enter_experience(), (false, vec![]));
    }

    #[test]
    fn back_to_landing_keeps_live_scene() {
        let mut c = in_main("presentation");
        c.back_to_landing();
        c.advance(ms(600));
        assert_eq!(c.state().section, Section::Landing);
        assert!(c.live_scene().is_ok());

        c.enter_experience();
        c.advance(ms(900));
        assert_eq!(c.factory().created(SceneKind::Live), 1);
    }

    #[test]
    fn gesture_flashes_live_ring() {
        let mut c = in_main("presentation");
        c.simulate_gesture(GestureKind::Tap);
        let scene = c.live_scene().unwrap();
        assert_eq!(scene.ring_color(), Rgb::LAVENDER);
        assert_eq!(scene.property(Property::EmissiveIntensity), 1.0);

        c.advance(ms(800));
        let scene = c.live_scene().unwrap();
        assert_eq!(scene.ring_color(), Rgb::INDIGO);
        assert_eq!(scene.property(Property::EmissiveIntensity), 0.5);
        assert_eq!(scene.property(Property::PositionY), 0.0);
    }

    #[test]
    fn retriggered_flash_restores_configured_color() {
        let mut c = in_main("presentation");
        c.simulate_gesture(GestureKind::Tap);
        c.advance(ms(500));
        c.simulate_gesture(GestureKind::Rotate);
        c.advance(ms(1000));
        assert_eq!(c.live_scene().unwrap().ring_color(), Rgb::INDIGO);
    }

    #[test]
    fn swipe_tilts_live_ring_and_returns() {
        let mut c = in_main("presentation");
        c.simulate_gesture(GestureKind::SwipeLeft);
        c.advance(ms(800));
        let tilt = c.live_scene().unwrap().property(Property::RotationZ);
        assert!((tilt + std::f64::consts::FRAC_PI_4).abs() < 1e-9);

        c.advance(ms(1500));
        assert_eq!(c.live_scene().unwrap().property(Property::RotationZ), 0.0);
    }

    #[test]
    fn gesture_without_live_scene_still_updates_state() {
        let mut c = controller("media");
        c.simulate_gesture(GestureKind::Rotate);
        let card = c.state().response.unwrap();
        assert_eq!(card.mapping.icon, "🔊");
        assert_eq!(card.mapping.action, "Volume Control");
        assert!(c.live_scene().is_err());
    }

    #[test]
    fn unknown_gesture_name_is_rejected() {
        let mut c = controller("media");
        let err = c.simulate_gesture_named("wave").unwrap_err();
        assert!(matches!(err, GestureRingError::InvalidGestureKind(_)));
        assert!(c.state().timeline.is_empty());
        assert!(c.simulate_gesture_named("swipe-left").is_ok());
    }

    #[test]
    fn context_label_is_stored_verbatim() {
        let mut c = controller("presentation");
        let (_, actions) = c.switch_context("Kitchen Sink");
        assert_eq!(actions, vec![Action::ActivateContext("Kitchen Sink".to_string())]);
        assert_eq!(c.state().context_label, "Kitchen Sink");
    }

    #[test]
    fn landing_cycle_plays_hero_effects_only_on_landing() {
        let state = AppState::new(Theme::default(), "presentation", ViewName::live());
        let options = ControllerOptions { seed: Some(1), landing_cycle: Some(ms(4000)) };
        let mut c = Controller::new(state, HeadlessFactory::new(), options);

        c.advance(ms(4000));
        assert!(c.is_animating(TweenTarget::Scene(SceneKind::Hero, Property::RotationZ)));
        assert!(c.state().timeline.is_empty());
        assert_eq!(c.state().current_gesture, GestureKind::Idle);

        c.advance(ms(8000));
        assert!(c.is_animating(TweenTarget::Scene(SceneKind::Hero, Property::GlowOpacity)));

        c.enter_experience();
        c.advance(ms(8300));
        c.advance(ms(12000));
        assert!(!c.is_animating(TweenTarget::Scene(SceneKind::Hero, Property::RotationY)));
        assert!(c.is_pending(TimerKey::LandingCycle));
    }

    #[test]
    fn ambient_motion_yields_to_tweens() {
        let mut c = in_main("presentation");
        let before = c.live_scene().unwrap().property(Property::RotationY);
        c.advance(ms(316));
        let after = c.live_scene().unwrap().property(Property::RotationY);
        assert!((after - before - LIVE_SPIN_STEP).abs() < 1e-9);

        c.simulate_gesture(GestureKind::Rotate);
        c.advance(ms(716));
        assert!(c.is_animating(TweenTarget::Scene(SceneKind::Live, Property::RotationY)));
        c.advance(ms(1116));
        // The spin lands on its target and ambient motion resumes in the same frame.
        let spun = c.live_scene().unwrap().property(Property::RotationY);
        assert!((spun - (after + std::f64::consts::TAU + LIVE_SPIN_STEP)).abs() < 1e-9);
        assert!(c.live_scene().unwrap().property(Property::ParticleRotationY) < 0.0);
    }

    #[test]
    fn hero_ambient_motion_follows_phase() {
        let mut c = controller("presentation");
        c.advance(ms(16));
        let hero = c.hero_scene();
        assert!((hero.property(Property::RotationX) - (0.005_f64).sin() * 0.3).abs() < 1e-12);
        assert!((hero.property(Property::GlowOpacity) - (0.2 + (0.02_f64).sin() * 0.1)).abs() < 1e-12);
        assert!((hero.property(Property::RotationY) - HERO_SPIN_STEP).abs() < 1e-12);
    }

    #[test]
    fn quit_emits_action() {
        let mut c = controller("presentation");
        assert_eq!(c.handle_event(&Event::Quit).unwrap(), (false, vec![Action::Quit]));
    }
}

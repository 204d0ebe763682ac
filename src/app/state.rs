//! Application state and view model computation.
//!
//! [`AppState`] is the single record of everything the presentation layer
//! shows: which section is visible, the active view and context, the current
//! gesture with its confidence, the response card and the timeline. Exactly one
//! instance exists, owned by the [`Controller`](super::Controller); nothing in
//! the crate holds it globally.
//!
//! # Time
//!
//! The state holds no timers of its own. Everything time-based (the confidence
//! ramp, the return to idle, the response highlight, section transitions) is
//! driven by the controller's scheduler, which writes results back here.
//!
//! # Example
//!
//! ```
//! use gesture_ring::app::{AppState, Section, ViewName};
//! use gesture_ring::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), "presentation", ViewName::live());
//! assert_eq!(state.section, Section::Landing);
//! let vm = state.compute_viewmodel(24, 80, None);
//! assert!(vm.landing.is_some());
//! ```

use super::modes::{Section, ViewName};
use super::timeline::Timeline;
use crate::domain::{mode_label, GestureKind, ResponseMapping};
use crate::scene::{SceneKind, SceneSnapshot};
use crate::ui::theme::Theme;
use serde::Serialize;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, LandingInfo, ResponseInfo, SceneLine, StatusInfo, TimelineItem, UIViewModel,
};

/// Response card contents and highlight flag.
///
/// Serializes flat: the mapping's `icon`, `label` and `action` sit beside
/// `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseCard {
    /// Icon, label and action of the matched response.
    #[serde(flatten)]
    pub mapping: ResponseMapping,
    /// Highlighted; cleared by a timer shortly after the gesture.
    pub active: bool,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Visible section. During a transition this is still the old section.
    pub section: Section,

    /// Destination of an in-flight section transition.
    pub pending_section: Option<Section>,

    /// Active tab of the main section.
    pub view: ViewName,

    /// Context label as last selected, unvalidated.
    ///
    /// Lookups resolve it with [`ContextMode::resolve`](crate::domain::ContextMode::resolve),
    /// so an unknown label behaves like `general`.
    pub context_label: String,

    /// Gesture on display, `Idle` when nothing is recognized.
    pub current_gesture: GestureKind,

    /// Recognition confidence on a 0 to 100 scale, tweened by the controller.
    pub confidence: f64,

    /// Display label of the context the last response came from.
    pub mode_label: String,

    /// Last response, if any gesture has produced one.
    pub response: Option<ResponseCard>,

    /// Recent gestures, newest first.
    pub timeline: Timeline,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: landing section, idle gesture, empty timeline.
    #[must_use]
    pub fn new(theme: Theme, context_label: &str, view: ViewName) -> Self {
        Self {
            section: Section::Landing,
            pending_section: None,
            view,
            context_label: context_label.to_string(),
            current_gesture: GestureKind::Idle,
            confidence: 0.0,
            mode_label: "General".to_string(),
            response: None,
            timeline: Timeline::new(),
            theme,
        }
    }

    /// Confidence as displayed: rounded and clamped to `0..=100`.
    #[must_use]
    pub fn confidence_percent(&self) -> u8 {
        // Clamped to 0..=100, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = self.confidence.round().clamp(0.0, 100.0) as u8;
        percent
    }

    /// Shows `mapping` on the response card, highlighted.
    ///
    /// Also refreshes `mode_label` from the current context label, so the
    /// header names the context the response came from.
    pub fn show_response(&mut self, mapping: ResponseMapping) {
        self.response = Some(ResponseCard { mapping, active: true });
        self.mode_label = mode_label(&self.context_label);
    }

    /// Removes the highlight from the response card, keeping its contents.
    pub fn clear_response_highlight(&mut self) {
        if let Some(card) = self.response.as_mut() {
            card.active = false;
        }
    }

    /// Returns the displayed gesture to idle.
    pub fn reset_gesture(&mut self) {
        self.current_gesture = GestureKind::Idle;
        self.confidence = 0.0;
    }

    /// Scene whose summary belongs to the visible section.
    #[must_use]
    pub const fn visible_scene(&self) -> SceneKind {
        match self.section {
            Section::Landing => SceneKind::Hero,
            Section::Main => SceneKind::Live,
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// `scene` is a snapshot of [`visible_scene`](Self::visible_scene), when it
    /// exists. The timeline is cut to the rows left after the fixed panels.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns (sizes the confidence bar)
    /// * `scene` - Snapshot for the scene summary line
    ///
    /// # Returns
    ///
    /// A view model for the visible section. The landing model has no status,
    /// response or timeline; the main model has no landing copy. In the main
    /// section `empty_state` is set exactly when the timeline is empty.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize, scene: Option<&SceneSnapshot>) -> UIViewModel {
        let header = HeaderInfo {
            title: " Gesture Ring ".to_string(),
            mode: self.mode_label.clone(),
        };
        let scene = scene.map(Self::compute_scene_line);
        let transition = self.pending_section.map(|section| format!("→ {section}"));
        let footer = self.compute_footer();

        if self.section == Section::Landing {
            return UIViewModel {
                header,
                landing: Some(LandingInfo {
                    tagline: "Touchless control. One ring. Every context.".to_string(),
                    prompt: "Type `enter` to try the live demo".to_string(),
                }),
                status: None,
                response: None,
                timeline: vec![],
                empty_state: None,
                scene,
                transition,
                footer,
            };
        }

        let available_rows = rows.saturating_sub(Self::MAIN_CHROME_ROWS);
        let timeline: Vec<TimelineItem> = self
            .timeline
            .iter()
            .take(available_rows)
            .map(|entry| TimelineItem {
                time: entry.time_label(),
                text: entry.summary(),
            })
            .collect();

        let empty_state = self.timeline.is_empty().then(|| EmptyState {
            message: "No gestures yet".to_string(),
            subtitle: "Try `tap`, `rotate`, `left` or `right`".to_string(),
        });

        UIViewModel {
            header,
            landing: None,
            status: Some(self.compute_status(cols)),
            response: self.response.map(|card| ResponseInfo {
                icon: card.mapping.icon.to_string(),
                label: card.mapping.label.to_string(),
                action: card.mapping.action.to_string(),
                active: card.active,
            }),
            timeline,
            empty_state,
            scene,
            transition,
            footer,
        }
    }

    /// Header, status, response card, scene line, timeline title and footer.
    const MAIN_CHROME_ROWS: usize = 12;

    /// Gesture label, confidence and bar size.
    ///
    /// The bar is 20 columns narrower than the terminal, capped at 40 cells;
    /// filled cells round down.
    fn compute_status(&self, cols: usize) -> StatusInfo {
        const MAX_BAR_WIDTH: usize = 40;
        const LABEL_MARGIN: usize = 20;

        let confidence = self.confidence_percent();
        let bar_width = cols.saturating_sub(LABEL_MARGIN).min(MAX_BAR_WIDTH);
        let bar_filled = bar_width * usize::from(confidence) / 100;

        StatusInfo {
            gesture: self.current_gesture.status_label().to_string(),
            confidence,
            bar_filled,
            bar_width,
            view: self.view.to_string(),
        }
    }

    /// One-line scene summary. Glow opacity is only shown for the hero ring,
    /// the only ring that has a glow.
    fn compute_scene_line(snapshot: &SceneSnapshot) -> SceneLine {
        let [x, y, z] = snapshot.rotation;
        let mut details = format!(
            "rot {x:+.2} {y:+.2} {z:+.2}  lift {:+.2}  emissive {:.2}  {}",
            snapshot.position_y, snapshot.emissive_intensity, snapshot.ring_color
        );
        if snapshot.kind == SceneKind::Hero {
            details.push_str(&format!("  glow {:.2}", snapshot.glow_opacity));
        }
        SceneLine {
            label: format!("{} ring", snapshot.kind),
            details,
        }
    }

    /// Command hints for the visible section.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.section {
            Section::Landing => "enter: start  quit: exit",
            Section::Main => "left/right/tap/rotate/idle: gesture  view <name>  context <label>  back  quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

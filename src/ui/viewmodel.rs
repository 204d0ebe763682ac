//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They contain no business logic, only
//! display-ready strings and numbers.
//!
//! # Example
//!
//! ```
//! use gesture_ring::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Gesture Ring ".to_string(), mode: "Presentation".to_string() },
//!     landing: None,
//!     status: None,
//!     response: None,
//!     timeline: vec![],
//!     empty_state: None,
//!     scene: None,
//!     transition: None,
//!     footer: FooterInfo { keybindings: "quit".to_string() },
//! };
//! assert!(vm.timeline.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar with the context mode.
    pub header: HeaderInfo,

    /// Present while the landing section is shown.
    pub landing: Option<LandingInfo>,

    /// Gesture status panel (main section only).
    pub status: Option<StatusInfo>,

    /// Response card, once a gesture has produced one.
    pub response: Option<ResponseInfo>,

    /// Visible timeline rows, newest first.
    pub timeline: Vec<TimelineItem>,

    /// Placeholder shown in the main section before any gesture.
    pub empty_state: Option<EmptyState>,

    /// One-line summary of the scene for the current section.
    pub scene: Option<SceneLine>,

    /// Destination of an in-flight section transition.
    pub transition: Option<String>,

    /// Command help line.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Application title.
    pub title: String,
    /// Display label of the active context mode.
    pub mode: String,
}

/// Landing section copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingInfo {
    /// Line under the hero ring.
    pub tagline: String,
    /// How to enter the main section.
    pub prompt: String,
}

/// Current gesture and recognition confidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    /// Gesture status label, e.g. `Tap 👆`.
    pub gesture: String,

    /// Rounded confidence, 0 to 100.
    pub confidence: u8,

    /// Filled cells of the confidence bar.
    pub bar_filled: usize,

    /// Total cells of the confidence bar.
    pub bar_width: usize,

    /// Active view name.
    pub view: String,
}

/// Response card contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    /// Emoji icon.
    pub icon: String,
    /// Response shown to the user, e.g. `Next Slide`.
    pub label: String,
    /// Action name, e.g. `Navigate Forward`.
    pub action: String,
    /// Highlighted for a short window after the gesture.
    pub active: bool,
}

/// One timeline row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    /// `HH:MM:SS`.
    pub time: String,
    /// `Gesture → Action`.
    pub text: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,
    /// Hint below the message.
    pub subtitle: String,
}

/// Scene summary, e.g. rotation angles and the ring color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneLine {
    /// Scene name.
    pub label: String,
    /// Rotation, height and color.
    pub details: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command help text.
    pub keybindings: String,
}

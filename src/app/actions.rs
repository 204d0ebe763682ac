//! Actions for the presentation layer.
//!
//! The controller returns a `Vec<Action>` after each event. Actions describe
//! presentation-side effects the core cannot perform itself, such as starting a
//! cross-fade or highlighting a tab. State that can be read from
//! [`AppState`](super::AppState) (gesture, confidence, response card, timeline)
//! is not duplicated here; the runtime re-renders when the handler says so.

use super::modes::Section;
use crate::scene::SceneKind;

/// Presentation side effect requested by the controller.
///
/// The runtime executes actions in the order they are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Begin fading a section out. Emitted when a transition starts.
    FadeOut(Section),

    /// Fade a section in. Emitted when the transition delay has elapsed.
    FadeIn(Section),

    /// Mark a navigation tab active. Carries the normalized view name.
    ActivateTab(String),

    /// Mark a context button and panel active. Carries the label verbatim,
    /// so a runtime with no button for it highlights nothing.
    ActivateContext(String),

    /// A scene backend instance was created.
    SceneCreated(SceneKind),

    /// Stop the runtime.
    Quit,
}

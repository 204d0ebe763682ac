//! JSON dump of the running session.
//!
//! A [`SessionDump`] borrows the controller's state for the duration of one
//! serialization. The terminal runtime writes it on the `dump` command; it is
//! a debugging aid, and nothing reads it back.
//!
//! # Format
//!
//! ```json
//! {
//!   "section": "main",
//!   "pending_section": null,
//!   "view": "live",
//!   "context": "presentation",
//!   "mode": "presentation",
//!   "gesture": "swipe-left",
//!   "confidence": 93,
//!   "response": { "icon": "📊", "label": "Previous Slide", "action": "Navigate Back", "active": true },
//!   "timeline": [{ "timestamp": "...", "at": { "secs": 1, "nanos": 0 }, "gesture": "swipe-left", "action_label": "Navigate Back" }],
//!   "scene": { "kind": "live", "rotation": [0.0, 0.1, -0.7], "position_y": 0.0, "...": "..." }
//! }
//! ```

use super::modes::{Section, ViewName};
use super::state::{AppState, ResponseCard};
use super::timeline::Timeline;
use crate::domain::{ContextMode, GestureKind, GestureRingError, Result};
use crate::scene::SceneSnapshot;
use serde::Serialize;

/// Serializable view of the session at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct SessionDump<'a> {
    /// Visible section.
    pub section: Section,
    /// Destination of an in-flight transition.
    pub pending_section: Option<Section>,
    /// Active tab.
    pub view: &'a ViewName,
    /// Context label as selected.
    pub context: &'a str,
    /// Context the label resolves to for lookups.
    pub mode: ContextMode,
    /// Gesture on display.
    pub gesture: GestureKind,
    /// Displayed confidence percentage.
    pub confidence: u8,
    /// Response card, if any.
    pub response: Option<&'a ResponseCard>,
    /// Timeline, newest first.
    pub timeline: &'a Timeline,
    /// Snapshot of the visible scene, if it exists.
    pub scene: Option<SceneSnapshot>,
}

impl<'a> SessionDump<'a> {
    /// Captures `state` together with an optional scene snapshot.
    #[must_use]
    pub fn new(state: &'a AppState, scene: Option<SceneSnapshot>) -> Self {
        Self {
            section: state.section,
            pending_section: state.pending_section,
            view: &state.view,
            context: &state.context_label,
            mode: ContextMode::resolve(&state.context_label),
            gesture: state.current_gesture,
            confidence: state.confidence_percent(),
            response: state.response.as_ref(),
            timeline: &state.timeline,
            scene,
        }
    }

    /// Serializes the dump as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::Serialization`] if serde_json rejects a
    /// value.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GestureRingError::from)
    }
}

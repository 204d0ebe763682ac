//! Static response table.
//!
//! Each (context, gesture) pair maps to a canned response shown on the response
//! card. The table is a fixed two-dimensional array indexed by the enum variants;
//! a missing cell falls back to the general context. `Idle` has no response in
//! any context.

use super::context::ContextMode;
use super::gesture::GestureKind;
use serde::Serialize;

/// Canned response for a gesture in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseMapping {
    /// Emoji shown on the response card.
    pub icon: &'static str,
    /// What happened, e.g. `Previous Slide`.
    pub label: &'static str,
    /// Action name, also recorded in the timeline.
    pub action: &'static str,
}

const fn r(icon: &'static str, label: &'static str, action: &'static str) -> Option<ResponseMapping> {
    Some(ResponseMapping { icon, label, action })
}

/// Rows follow [`ContextMode::index`], columns follow [`GestureKind::index`].
const RESPONSES: [[Option<ResponseMapping>; 5]; 4] = [
    // presentation
    [
        r("📊", "Previous Slide", "Navigate Back"),
        r("📊", "Next Slide", "Navigate Forward"),
        r("🎯", "Highlight Active", "Toggle Pointer"),
        r("🔍", "Zoom Adjusted", "Zoom In/Out"),
        None,
    ],
    // media
    [
        r("⏮️", "Previous Track", "Media Control"),
        r("⏭️", "Next Track", "Media Control"),
        r("⏯️", "Play/Pause", "Toggle Playback"),
        r("🔊", "Volume Changed", "Volume Control"),
        None,
    ],
    // accessibility
    [
        r("🔊", "Previous Item", "Speak Previous"),
        r("🔊", "Next Item", "Speak Next"),
        r("📢", "Reading Aloud", "Text-to-Speech"),
        r("⚡", "Speed Adjusted", "Speech Rate"),
        None,
    ],
    // general
    [
        r("👈", "Swipe Left Detected", "Generic Back"),
        r("👉", "Swipe Right Detected", "Generic Forward"),
        r("👆", "Tap Detected", "Generic Select"),
        r("🔄", "Rotation Detected", "Generic Adjust"),
        None,
    ],
];

/// Returns the cell for exactly this pair, without fallback.
///
/// Every context has a row for every actionable gesture today, so this only
/// differs from [`lookup`] for cells a future table leaves empty.
#[must_use]
pub const fn mapping(context: ContextMode, gesture: GestureKind) -> Option<ResponseMapping> {
    RESPONSES[context.index()][gesture.index()]
}

/// Looks up the response for a gesture, falling back to the general context.
///
/// ```
/// use gesture_ring::domain::{lookup, ContextMode, GestureKind};
///
/// let response = lookup(ContextMode::Media, GestureKind::Rotate).unwrap();
/// assert_eq!(response.label, "Volume Changed");
/// assert!(lookup(ContextMode::Media, GestureKind::Idle).is_none());
/// ```
#[must_use]
pub fn lookup(context: ContextMode, gesture: GestureKind) -> Option<ResponseMapping> {
    mapping(context, gesture).or_else(|| mapping(ContextMode::General, gesture))
}

/// Resolves a raw context label and looks up the response.
///
/// # Parameters
///
/// * `context_label` - Label as selected by the user, not validated
/// * `gesture` - Gesture to respond to
///
/// # Returns
///
/// The response for the resolved context, falling back to the general
/// context. `None` only for [`GestureKind::Idle`].
///
/// ```
/// use gesture_ring::domain::{lookup_label, GestureKind};
///
/// assert_eq!(lookup_label("PRESENTATION", GestureKind::Tap).unwrap().label, "Highlight Active");
/// assert_eq!(lookup_label("cinema", GestureKind::Tap).unwrap().label, "Tap Detected");
/// ```
#[must_use]
pub fn lookup_label(context_label: &str, gesture: GestureKind) -> Option<ResponseMapping> {
    lookup(ContextMode::resolve(context_label), gesture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_swipe_left_navigates_back() {
        let response = lookup(ContextMode::Presentation, GestureKind::SwipeLeft).unwrap();
        assert_eq!(
            response,
            ResponseMapping { icon: "📊", label: "Previous Slide", action: "Navigate Back" }
        );
    }

    #[test]
    fn media_rotate_changes_volume() {
        let response = lookup(ContextMode::Media, GestureKind::Rotate).unwrap();
        assert_eq!(response.icon, "🔊");
        assert_eq!(response.action, "Volume Control");
    }

    #[test]
    fn unknown_label_falls_back_to_general() {
        let response = lookup_label("kitchen", GestureKind::Tap).unwrap();
        assert_eq!(response, lookup(ContextMode::General, GestureKind::Tap).unwrap());
        assert_eq!(response.label, "Tap Detected");
    }

    #[test]
    fn every_context_maps_every_actionable_gesture() {
        for context in ContextMode::ALL {
            for gesture in GestureKind::ACTIONABLE {
                assert!(mapping(context, gesture).is_some(), "{context}/{gesture}");
            }
            assert!(mapping(context, GestureKind::Idle).is_none());
        }
    }
}

//! Gesture identifiers.
//!
//! The set of gestures is closed: four actionable gestures plus `Idle`, the
//! resting state shown between detections. Identifiers coming from the
//! presentation layer are parsed with [`FromStr`] and rejected with
//! [`GestureRingError::InvalidGestureKind`] when they fall outside the set.

use super::error::GestureRingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A simulated gesture.
///
/// Serializes as its wire identifier (`swipe-left`, `tap`, ...), the same
/// string [`as_str`](Self::as_str) returns and `parse` accepts.
///
/// # Example
///
/// ```
/// use gesture_ring::domain::GestureKind;
///
/// let gesture: GestureKind = "Swipe_Left".parse()?;
/// assert_eq!(gesture, GestureKind::SwipeLeft);
/// assert_eq!(gesture.swipe_direction(), Some(-1.0));
/// assert_eq!(gesture.status_label(), "Swipe Left 👈");
/// # Ok::<(), gesture_ring::domain::GestureRingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureKind {
    /// Hand moves right to left. Tilts the ring and steps back.
    SwipeLeft,
    /// Hand moves left to right. Tilts the ring and steps forward.
    SwipeRight,
    /// Short push toward the ring. Glow pulse or hop.
    Tap,
    /// Circular motion. Turns the ring about Y.
    Rotate,
    /// Nothing detected.
    Idle,
}

impl GestureKind {
    /// The four gestures that carry a response.
    pub const ACTIONABLE: [Self; 4] = [Self::SwipeLeft, Self::SwipeRight, Self::Tap, Self::Rotate];

    /// Order used by the landing-page detection cycle.
    pub const LANDING_CYCLE: [Self; 5] = [
        Self::SwipeLeft,
        Self::SwipeRight,
        Self::Tap,
        Self::Rotate,
        Self::Idle,
    ];

    /// Wire identifier, e.g. `swipe-left`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SwipeLeft => "swipe-left",
            Self::SwipeRight => "swipe-right",
            Self::Tap => "tap",
            Self::Rotate => "rotate",
            Self::Idle => "idle",
        }
    }

    /// Human-readable name used in the timeline.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SwipeLeft => "Swipe Left",
            Self::SwipeRight => "Swipe Right",
            Self::Tap => "Tap",
            Self::Rotate => "Rotate",
            Self::Idle => "Idle",
        }
    }

    /// Name with glyph, shown in the live gesture status.
    #[must_use]
    pub const fn status_label(self) -> &'static str {
        match self {
            Self::SwipeLeft => "Swipe Left 👈",
            Self::SwipeRight => "Swipe Right 👉",
            Self::Tap => "Tap 👆",
            Self::Rotate => "Rotate 🔄",
            Self::Idle => "Idle",
        }
    }

    /// Signed swipe direction, `None` for non-swipe gestures.
    ///
    /// Left is `-1.0` and right is `1.0`; effects multiply their tilt and
    /// offset by it.
    #[must_use]
    pub const fn swipe_direction(self) -> Option<f64> {
        match self {
            Self::SwipeLeft => Some(-1.0),
            Self::SwipeRight => Some(1.0),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::SwipeLeft => 0,
            Self::SwipeRight => 1,
            Self::Tap => 2,
            Self::Rotate => 3,
            Self::Idle => 4,
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureKind {
    type Err = GestureRingError;

    /// Parses a gesture identifier.
    ///
    /// Matching is case-insensitive and accepts `_` in place of `-`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::InvalidGestureKind`] for unknown identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "swipe-left" => Ok(Self::SwipeLeft),
            "swipe-right" => Ok(Self::SwipeRight),
            "tap" => Ok(Self::Tap),
            "rotate" => Ok(Self::Rotate),
            "idle" => Ok(Self::Idle),
            _ => Err(GestureRingError::InvalidGestureKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_identifiers_leniently() {
        assert_eq!("swipe-left".parse::<GestureKind>().unwrap(), GestureKind::SwipeLeft);
        assert_eq!("SWIPE_RIGHT".parse::<GestureKind>().unwrap(), GestureKind::SwipeRight);
        assert_eq!(" tap ".parse::<GestureKind>().unwrap(), GestureKind::Tap);
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "pinch".parse::<GestureKind>().unwrap_err();
        assert!(matches!(err, GestureRingError::InvalidGestureKind(ref s) if s == "pinch"));
    }

    #[test]
    fn wire_identifier_matches_serde() {
        for gesture in GestureKind::LANDING_CYCLE {
            let json = serde_json::to_string(&gesture).unwrap();
            assert_eq!(json, format!("\"{}\"", gesture.as_str()));
        }
    }
}

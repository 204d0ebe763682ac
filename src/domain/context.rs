//! Context modes selecting the active response table.

use super::error::GestureRingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The semantic domain a gesture is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextMode {
    /// Slide navigation.
    Presentation,
    /// Playback and volume.
    Media,
    /// Assistive actions.
    Accessibility,
    /// Fallback for any other label.
    #[default]
    General,
}

impl ContextMode {
    /// Every mode, in response table row order.
    pub const ALL: [Self; 4] = [Self::Presentation, Self::Media, Self::Accessibility, Self::General];

    /// Lowercase identifier, as accepted by `parse`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presentation => "presentation",
            Self::Media => "media",
            Self::Accessibility => "accessibility",
            Self::General => "general",
        }
    }

    /// Resolves a free-form context label, falling back to [`ContextMode::General`].
    ///
    /// Context labels are stored verbatim by the controller; this is the only
    /// place they are interpreted.
    ///
    /// ```
    /// use gesture_ring::domain::ContextMode;
    ///
    /// assert_eq!(ContextMode::resolve("media"), ContextMode::Media);
    /// assert_eq!(ContextMode::resolve("kitchen"), ContextMode::General);
    /// ```
    #[must_use]
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::debug!(label = %label, "unrecognized context label, using general");
            Self::General
        })
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Presentation => 0,
            Self::Media => 1,
            Self::Accessibility => 2,
            Self::General => 3,
        }
    }
}

impl fmt::Display for ContextMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextMode {
    type Err = GestureRingError;

    /// Strict, case-insensitive parse of a context identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::InvalidContextMode`] for anything other
    /// than the four identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presentation" => Ok(Self::Presentation),
            "media" => Ok(Self::Media),
            "accessibility" => Ok(Self::Accessibility),
            "general" => Ok(Self::General),
            _ => Err(GestureRingError::InvalidContextMode(s.to_string())),
        }
    }
}

/// Formats a context label for the "current mode" display.
///
/// Upper-cases the first character and keeps the rest of the label untouched,
/// so unknown labels are shown as typed.
///
/// ```
/// use gesture_ring::domain::mode_label;
///
/// assert_eq!(mode_label("presentation"), "Presentation");
/// assert_eq!(mode_label("kitchen table"), "Kitchen table");
/// assert_eq!(mode_label(""), "");
/// ```
#[must_use]
pub fn mode_label(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

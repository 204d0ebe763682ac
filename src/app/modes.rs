//! Section and view types for the navigation state machine.
//!
//! # State Machine
//!
//! The application shows one of two sections:
//! - **Landing**: hero ring, automatic gesture cycle
//! - **Main**: live ring, simulated gestures, responses and timeline
//!
//! `Landing ⇄ Main` transitions go through a fixed cross-fade delay. While a
//! transition is in flight the section is still the old one and
//! [`AppState::pending_section`](super::AppState::pending_section) holds the
//! destination; further transition requests are ignored until it lands.
//!
//! Views are tabs inside the main section. Only the `live` view has behavior
//! attached (it needs the live scene); other names are accepted as labels.

use crate::domain::{GestureRingError, Result};
use serde::Serialize;
use std::fmt;

/// Top-level section of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero ring with the automatic gesture cycle. Shown at start.
    #[default]
    Landing,
    /// Live ring, responses and timeline.
    Main,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Landing => "landing",
            Self::Main => "main",
        })
    }
}

/// Name of a tab in the main section.
///
/// Always non-blank, trimmed and lower-cased.
///
/// ```
/// use gesture_ring::app::ViewName;
///
/// let view = ViewName::new("  Live ").unwrap();
/// assert!(view.is_live());
/// assert!(ViewName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewName(String);

impl ViewName {
    /// Name of the tab that shows the live ring.
    pub const LIVE: &'static str = "live";

    /// Validates a view name.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::InvalidViewName`] for a blank name.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GestureRingError::InvalidViewName(name.to_string()));
        }
        Ok(Self(name.to_ascii_lowercase()))
    }

    /// The live view.
    #[must_use]
    pub fn live() -> Self {
        Self(Self::LIVE.to_string())
    }

    /// Whether this is the live view.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0 == Self::LIVE
    }

    /// The normalized name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

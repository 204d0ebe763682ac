//! Domain layer for the gesture ring.
//!
//! Core identifiers and static data, independent of timing and rendering:
//!
//! - [`error`]: Error types and result aliases
//! - [`gesture`]: The closed set of simulated gestures
//! - [`context`]: Context modes and label resolution
//! - [`response`]: The (context, gesture) response table
//!
//! # Examples
//!
//! ```
//! use gesture_ring::domain::{lookup_label, GestureKind, Result};
//!
//! fn respond(label: &str, gesture: &str) -> Result<Option<&'static str>> {
//!     let gesture: GestureKind = gesture.parse()?;
//!     Ok(lookup_label(label, gesture).map(|r| r.label))
//! }
//!
//! assert_eq!(respond("presentation", "swipe-right").unwrap(), Some("Next Slide"));
//! ```

pub mod context;
pub mod error;
pub mod gesture;
pub mod response;

pub use context::{mode_label, ContextMode};
pub use error::{GestureRingError, Result};
pub use gesture::GestureKind;
pub use response::{lookup, lookup_label, ResponseMapping};

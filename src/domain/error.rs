//! Error types for the gesture ring core.
//!
//! This module defines the centralized error type [`GestureRingError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Most failure paths in the demo are absorbed rather than surfaced: an unmapped
//! context falls back to the general response table and a missing scene skips
//! its visual effect. The variants below cover the boundaries where input is
//! untrusted (identifiers typed by a user or read from configuration).

use crate::scene::SceneKind;
use thiserror::Error;

/// The main error type for gesture ring operations.
///
/// # Examples
///
/// ```
/// use gesture_ring::domain::{GestureKind, GestureRingError};
///
/// let err = "wave".parse::<GestureKind>().unwrap_err();
/// assert!(matches!(err, GestureRingError::InvalidGestureKind(_)));
/// ```
#[derive(Debug, Error)]
pub enum GestureRingError {
    /// A gesture identifier outside the closed enumeration.
    ///
    /// Raised when parsing `swipe-left`, `swipe-right`, `tap`, `rotate` or
    /// `idle` fails. The string carries the rejected identifier.
    #[error("Unknown gesture: {0}")]
    InvalidGestureKind(String),

    /// A context label that does not name a [`ContextMode`](super::ContextMode).
    ///
    /// Only produced by strict parsing. Lookups resolve unknown labels to the
    /// general context instead of failing.
    #[error("Unknown context mode: {0}")]
    InvalidContextMode(String),

    /// A view name that cannot be shown (currently: the empty name).
    #[error("Invalid view name: {0:?}")]
    InvalidViewName(String),

    /// A visual effect targeted a scene that has not been created yet.
    ///
    /// The dispatcher treats this as a safe no-op and only logs it.
    #[error("Scene not initialized: {0}")]
    SceneNotInitialized(SceneKind),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A session dump could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for gesture ring operations.
pub type Result<T> = std::result::Result<T, GestureRingError>;

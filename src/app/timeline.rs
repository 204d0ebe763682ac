//! Bounded, newest-first log of dispatched gestures.
//!
//! Only gestures with a response are logged; `Idle` never is. The log lives
//! for the session and serializes as a JSON array, newest first, as part of
//! the session dump.

use crate::domain::GestureKind;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of entries kept.
pub const TIMELINE_CAPACITY: usize = 10;

/// One dispatched gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Wall-clock time of the dispatch.
    pub timestamp: DateTime<Local>,
    /// Session offset of the dispatch.
    pub at: Duration,
    /// Gesture that was dispatched.
    pub gesture: GestureKind,
    /// Action name of the response, e.g. `Navigate Back`.
    pub action_label: String,
}

impl TimelineEntry {
    /// `HH:MM:SS`, the way the timeline displays it.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// `Swipe Left → Navigate Back`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} → {}", self.gesture.display_name(), self.action_label)
    }
}

/// Newest-first log holding at most [`TIMELINE_CAPACITY`] entries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: VecDeque<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front and evicts from the tail past [`TIMELINE_CAPACITY`].
    ///
    /// ```
    /// use gesture_ring::app::{Timeline, TimelineEntry, TIMELINE_CAPACITY};
    /// use gesture_ring::domain::GestureKind;
    /// use std::time::Duration;
    ///
    /// let mut timeline = Timeline::new();
    /// for i in 0..12 {
    ///     timeline.push(TimelineEntry {
    ///         timestamp: chrono::Local::now(),
    ///         at: Duration::from_secs(i),
    ///         gesture: GestureKind::Tap,
    ///         action_label: "Generic Select".to_string(),
    ///     });
    /// }
    /// assert_eq!(timeline.len(), TIMELINE_CAPACITY);
    /// assert_eq!(timeline.latest().map(|e| e.at), Some(Duration::from_secs(11)));
    /// ```
    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(TIMELINE_CAPACITY);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&TimelineEntry> {
        self.entries.front()
    }

    /// Number of entries, at most [`TIMELINE_CAPACITY`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no gesture has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(at_ms: u64, gesture: GestureKind) -> TimelineEntry {
        TimelineEntry {
            timestamp: Local::now(),
            at: Duration::from_millis(at_ms),
            gesture,
            action_label: "Generic Select".to_string(),
        }
    }

    #[test]
    fn keeps_ten_newest_first() {
        let mut timeline = Timeline::new();
        for i in 0..11 {
            timeline.push(entry(i, GestureKind::Tap));
        }
        assert_eq!(timeline.len(), TIMELINE_CAPACITY);
        assert_eq!(timeline.latest().unwrap().at, Duration::from_millis(10));
        assert!(timeline.iter().all(|e| e.at != Duration::ZERO), "oldest entry evicted");
    }

    #[test]
    fn summary_joins_gesture_and_action() {
        assert_eq!(entry(0, GestureKind::Tap).summary(), "Tap → Generic Select");
    }
}

//! Top-level rendering coordinator.
//!
//! Rendering is two steps:
//!
//! 1. **View Model Computation**: `AppState` plus a scene snapshot → `UIViewModel`
//! 2. **Component Rendering**: the layout for the visible section draws into a
//!    frame buffer, which is written to stdout in one call
//!
//! # Example
//!
//! ```
//! use gesture_ring::app::{AppState, ViewName};
//! use gesture_ring::ui::{render_to_string, Theme};
//!
//! let state = AppState::new(Theme::default(), "presentation", ViewName::live());
//! let vm = state.compute_viewmodel(24, 80, None);
//! let frame = render_to_string(&vm, &state.theme, 24, 80);
//! assert!(frame.contains("Gesture Ring"));
//! ```

use crate::app::AppState;
use crate::scene::SceneSnapshot;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

/// Cursor home, then erase the screen below it.
const CLEAR: &str = "\u{1b}[H\u{1b}[J";

/// Renders the UI for `state` to stdout.
///
/// # Parameters
///
/// * `state` - Application state to render
/// * `scene` - Snapshot of the visible scene, for the scene summary line
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// The frame is built in memory first and written with a single call, so a
/// partially drawn screen is never visible.
///
/// # Errors
///
/// Returns the I/O error if stdout cannot be written or flushed.
pub fn render(state: &AppState, scene: Option<&SceneSnapshot>, rows: usize, cols: usize) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel(rows, cols, scene);
    let frame = render_to_string(&viewmodel, &state.theme, rows, cols);

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}

/// Renders a view model into a complete frame of ANSI output.
///
/// The frame starts by clearing the screen; the layout is picked by whether
/// the view model carries landing copy.
#[must_use]
pub fn render_to_string(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::from(CLEAR);
    if vm.landing.is_some() {
        components::render_landing_mode(&mut out, vm, theme, cols, rows);
    } else {
        components::render_main_mode(&mut out, vm, theme, cols, rows);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Section, TimelineEntry, ViewName};
    use crate::domain::{lookup_label, GestureKind};
    use chrono::Local;
    use std::time::Duration;

    fn main_state() -> AppState {
        let mut state = AppState::new(Theme::default(), "presentation", ViewName::live());
        state.section = Section::Main;
        state
    }

    #[test]
    fn main_frame_shows_empty_state_before_first_gesture() {
        let state = main_state();
        let vm = state.compute_viewmodel(24, 80, None);
        let frame = render_to_string(&vm, &state.theme, 24, 80);
        assert!(frame.starts_with(CLEAR));
        assert!(frame.contains("No gestures yet"));
        assert!(frame.contains("Idle"));
    }

    #[test]
    fn main_frame_shows_response_and_timeline() {
        let mut state = main_state();
        state.current_gesture = GestureKind::SwipeLeft;
        state.confidence = 93.0;
        state.show_response(lookup_label("presentation", GestureKind::SwipeLeft).unwrap());
        state.timeline.push(TimelineEntry {
            timestamp: Local::now(),
            at: Duration::ZERO,
            gesture: GestureKind::SwipeLeft,
            action_label: "Navigate Back".to_string(),
        });

        let vm = state.compute_viewmodel(24, 80, None);
        let frame = render_to_string(&vm, &state.theme, 24, 80);
        assert!(frame.contains("Previous Slide"));
        assert!(frame.contains("Swipe Left → Navigate Back"));
        assert!(frame.contains(" 93%"));
        assert!(frame.contains("Presentation"));
        assert!(!frame.contains("No gestures yet"));
    }

    #[test]
    fn transition_replaces_footer_hints() {
        let mut state = AppState::new(Theme::default(), "presentation", ViewName::live());
        state.pending_section = Some(Section::Main);
        let vm = state.compute_viewmodel(24, 80, None);
        let frame = render_to_string(&vm, &state.theme, 24, 80);
        assert!(frame.contains("→ main"));
        assert!(!frame.contains("enter: start"));
    }
}

//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a frame buffer, starting
//! at a given row, and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the active mode
//! - [`footer`]: Command hints, or the pending transition
//! - [`landing`]: Landing copy and the scene summary line
//! - [`status`]: Gesture and confidence bar
//! - [`response`]: Response card
//! - [`timeline`]: Recent gestures
//! - [`empty`]: Placeholder before the first gesture
//!
//! # Layout Modes
//!
//! - [`render_landing_mode`]: Header + Landing copy + Scene + Footer
//! - [`render_main_mode`]: Header + Status + Response + Timeline + Scene + Footer

mod empty;
mod footer;
mod header;
mod landing;
mod response;
mod status;
mod timeline;

use crate::ui::helpers::start_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use landing::{render_landing, render_scene_line};
use response::render_response;
use status::render_status;
use timeline::render_timeline;

/// Renders a horizontal border line at `row`. Returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    start_line(out, row);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Scene line, border and footer pinned to the bottom three rows.
fn render_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(3);
    if let Some(scene) = &vm.scene {
        render_scene_line(out, footer_row - 2, scene, theme, cols);
    }
    render_border(out, footer_row - 1, &theme.colors.border, cols);

    let transition;
    let footer = match &vm.transition {
        Some(text) => {
            transition = FooterInfo { keybindings: text.clone() };
            &transition
        }
        None => &vm.footer,
    };
    render_footer(out, footer_row, footer, theme, cols);
}

/// Renders the landing section into `out`.
///
/// Landing layout:
///
/// ```text
/// [Header]
/// [Border]
/// [blank]
/// [Tagline]
/// [blank]
/// [Prompt]
/// [padding]
/// [Scene line]
/// [Border]
/// [Footer]
/// ```
pub fn render_landing_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(out, 1, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    if let Some(landing) = &vm.landing {
        render_landing(out, current_row + 1, landing, theme, cols);
    }
    render_bottom(out, vm, theme, cols, rows);
}

/// Renders the main section into `out`.
///
/// The response row is left blank until the first gesture, so the timeline
/// does not move when the card appears.
///
/// Main layout:
///
/// ```text
/// [Header]
/// [Border]
/// [Status - 2 lines]
/// [blank]
/// [Response card]
/// [Border]
/// [Timeline title + rows | Empty state]
/// [padding]
/// [Scene line]
/// [Border]
/// [Footer]
/// ```
pub fn render_main_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_header(out, 1, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    if let Some(status) = &vm.status {
        current_row = render_status(out, current_row, status, theme, cols);
    }
    current_row += 1;
    if let Some(response) = &vm.response {
        render_response(out, current_row, response, theme, cols);
    }
    current_row = render_border(out, current_row + 1, &theme.colors.border, cols);

    match &vm.empty_state {
        Some(empty) => {
            render_empty_state(out, current_row + 1, empty, theme, cols);
        }
        None => {
            render_timeline(out, current_row, &vm.timeline, theme, cols);
        }
    }
    render_bottom(out, vm, theme, cols, rows);
}

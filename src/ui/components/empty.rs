//! Empty state component renderer.
//!
//! Shown in place of the timeline before the first gesture of a session.

use crate::ui::helpers::{centered_padding, fit, start_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line centered message starting at `row`. Message in
/// `empty_state_fg`, subtitle dimmed. Returns the next row.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message = fit(&empty.message, cols);
    start_line(out, row);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&" ".repeat(centered_padding(&message, cols)));
    out.push_str(&message);
    out.push_str(Theme::reset());

    let subtitle = fit(&empty.subtitle, cols);
    start_line(out, row + 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(centered_padding(&subtitle, cols)));
    out.push_str(&subtitle);
    out.push_str(Theme::reset());
    row + 2
}

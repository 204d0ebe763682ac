//! Gesture status panel: current gesture, view and confidence bar.

use crate::ui::helpers::{fit, start_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;
use std::fmt::Write;

/// Renders two lines at `row`:
///
/// ```text
///  Gesture  Tap 👆                      view: live
///  Confidence [██████████████░░░░░░] 92%
/// ```
///
/// Returns the next row.
pub fn render_status(out: &mut String, row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    start_line(out, row);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(" Gesture    ");
    out.push_str(Theme::reset());
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&fit(status.gesture.as_str(), cols.saturating_sub(30)));
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let _ = write!(out, "   view: {}", status.view);
    out.push_str(Theme::reset());

    start_line(out, row + 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(" Confidence ");
    out.push_str(Theme::reset());
    out.push_str(&bar(status, theme));
    let _ = write!(out, " {:>3}%", status.confidence);
    row + 2
}

fn bar(status: &StatusInfo, theme: &Theme) -> String {
    let filled = status.bar_filled.min(status.bar_width);
    format!(
        "{}{}{}{}{}",
        Theme::fg(&theme.colors.bar_filled),
        "█".repeat(filled),
        Theme::fg(&theme.colors.bar_empty),
        "░".repeat(status.bar_width - filled),
        Theme::reset()
    )
}

//! Timeline list renderer.
//!
//! The list is already bounded and ordered by the time it reaches this
//! module; rendering is a plain walk over the items.

use crate::ui::helpers::{fit, start_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TimelineItem;

/// Renders a bold "Recent gestures" title and one row per item, newest first.
///
/// # Parameters
///
/// * `out` - Frame buffer to append to
/// * `row` - Row of the title (1-indexed)
/// * `items` - Timeline rows, newest first
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The row after the last item (`row + 1 + items.len()`)
///
/// # Layout
///
/// ```text
///  Recent gestures
///  14:02:11  Tap → Select
///  14:02:07  Swipe Left → Navigate Back
/// ```
///
/// Text past the time column is truncated to the remaining width.
pub fn render_timeline(out: &mut String, row: usize, items: &[TimelineItem], theme: &Theme, cols: usize) -> usize {
    start_line(out, row);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(" Recent gestures");
    out.push_str(Theme::reset());

    let mut current_row = row + 1;
    for item in items {
        start_line(out, current_row);
        out.push(' ');
        out.push_str(&Theme::fg(&theme.colors.timeline_time));
        out.push_str(&item.time);
        out.push_str(Theme::reset());
        out.push_str("  ");
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&fit(&item.text, cols.saturating_sub(12)));
        out.push_str(Theme::reset());
        current_row += 1;
    }
    current_row
}

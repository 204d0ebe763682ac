//! Header component renderer.
//!
//! Draws the title bar: application title and the active mode label, centered
//! in bold with the theme's header colors.

use crate::ui::helpers::{centered_padding, fit, start_line, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row`: title and mode label centered, padded to
/// the full width.
///
/// # Parameters
///
/// * `out` - Frame buffer to append to
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Title and mode label
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
/// [left padding] Gesture Ring · Presentation [right padding]
/// ```
///
/// Padding is counted in `char`s and text wider than `cols` is cut with `…`.
/// An odd remainder goes to the right.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let text = fit(&format!("{}· {} ", header.title, header.mode), cols);
    let padding = centered_padding(&text, cols);
    let trailing = cols.saturating_sub(padding + text_width(&text));

    start_line(out, row);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(trailing));
    out.push_str(Theme::reset());
    row + 1
}

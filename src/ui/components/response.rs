//! Response card renderer.

use crate::ui::helpers::{fit, start_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResponseInfo;

/// Renders the card on one line at `row`. While active the card is drawn in
/// the highlight colors.
///
/// # Parameters
///
/// * `out` - Frame buffer to append to
/// * `row` - Row position (1-indexed)
/// * `response` - Icon, label, action and highlight flag
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_response(out: &mut String, row: usize, response: &ResponseInfo, theme: &Theme, cols: usize) -> usize {
    let text = fit(&format!(" {} {}  ·  {} ", response.icon, response.label, response.action), cols.saturating_sub(2));

    start_line(out, row);
    out.push(' ');
    if response.active {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.response_active_fg));
        out.push_str(&Theme::bg(&theme.colors.response_active_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&text);
    out.push_str(Theme::reset());
    row + 1
}

//! Footer component renderer.

use crate::ui::helpers::{centered_padding, fit, start_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command hints centered and dimmed at `row`, truncated to fit.
/// Returns the next row.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = fit(&footer.keybindings, cols);
    let padding = centered_padding(&help_text, cols);

    start_line(out, row);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(padding));
    out.push_str(&help_text);
    out.push_str(Theme::reset());
    row + 1
}

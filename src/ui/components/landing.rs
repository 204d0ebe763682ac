//! Landing section copy and the scene summary line.

use crate::ui::helpers::{centered_padding, fit, start_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{LandingInfo, SceneLine};

/// Renders the tagline and prompt centered, starting at `row`.
///
/// The tagline is bold in the accent color; the prompt sits two rows below in
/// the dim color.
///
/// # Returns
///
/// The row after the prompt (row + 3)
pub fn render_landing(out: &mut String, row: usize, landing: &LandingInfo, theme: &Theme, cols: usize) -> usize {
    let tagline = fit(&landing.tagline, cols);
    start_line(out, row);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&" ".repeat(centered_padding(&tagline, cols)));
    out.push_str(&tagline);
    out.push_str(Theme::reset());

    let prompt = fit(&landing.prompt, cols);
    start_line(out, row + 2);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(centered_padding(&prompt, cols)));
    out.push_str(&prompt);
    out.push_str(Theme::reset());
    row + 3
}

/// Renders `label: details` on one line. Returns the next row.
pub fn render_scene_line(out: &mut String, row: usize, scene: &SceneLine, theme: &Theme, cols: usize) -> usize {
    start_line(out, row);
    out.push(' ');
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&scene.label);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str("  ");
    out.push_str(&fit(&scene.details, cols.saturating_sub(scene.label.len() + 3)));
    out.push_str(Theme::reset());
    row + 1
}

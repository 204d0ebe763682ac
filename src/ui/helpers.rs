//! Shared rendering utilities.
//!
//! Components draw into a `String` frame buffer rather than straight to
//! stdout, so a whole screen is flushed at once and tests can inspect the
//! output. Widths are counted in `char`s; emoji occupy one counted cell.

use std::fmt::Write;

/// ANSI escape moving the cursor to `row`, `col` (both 1-indexed).
#[must_use]
pub fn position_cursor(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}

/// Moves to the start of `row` and erases it.
pub fn start_line(out: &mut String, row: usize) {
    let _ = write!(out, "{}\u{1b}[2K", position_cursor(row, 1));
}

/// Number of `char`s in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` chars, ending in `…` when shortened.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

/// Left padding that centers `text` in `cols`.
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text_width(text)) / 2
}

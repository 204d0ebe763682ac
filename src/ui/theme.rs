//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are TOML files compiled into the binary; custom themes are
//! loaded from disk in the same format. Colors are hex strings rendered as
//! 24-bit ANSI escapes.
//!
//! # Built-in Themes
//!
//! - `indigo-night`: Dark theme around the ring's indigo (default)
//! - `lavender-day`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e0e7ff"
//! accent = "#6366f1"
//! text_normal = "#e2e8f0"
//! text_dim = "#64748b"
//! border = "#312e81"
//! bar_filled = "#a78bfa"
//! bar_empty = "#1e293b"
//! response_active_fg = "#0f172a"
//! response_active_bg = "#a78bfa"
//! timeline_time = "#818cf8"
//! empty_state_fg = "#94a3b8"
//! ```
//!
//! # Example
//!
//! ```
//! use gesture_ring::ui::Theme;
//!
//! let theme = Theme::from_name("indigo-night").unwrap();
//! print!("{}Ring{}", Theme::fg(&theme.colors.accent), Theme::reset());
//! ```

use crate::domain::{GestureRingError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "indigo-night";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Ring color swatch and section markers.
    pub accent: String,

    /// Primary text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Filled confidence bar cells.
    pub bar_filled: String,
    /// Empty confidence bar cells.
    pub bar_empty: String,

    /// Response card text while highlighted.
    pub response_active_fg: String,
    /// Response card background while highlighted.
    pub response_active_bg: String,

    /// Timestamp column of the timeline.
    pub timeline_time: String,

    /// "No gestures yet" placeholder.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`indigo-night` or `lavender-day`).
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "indigo-night" => include_str!("../../themes/indigo-night.toml"),
            "lavender-day" => include_str!("../../themes/lavender-day.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GestureRingError::Theme`] if the file cannot be read or its
    /// TOML content does not describe a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GestureRingError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents).map_err(|e| GestureRingError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: a readable `theme_file` wins, then a
    /// known `theme_name`, then the default.
    ///
    /// # Parameters
    ///
    /// * `theme_name` - Built-in theme name, if configured
    /// * `theme_file` - Custom theme path, already tilde-expanded
    ///
    /// # Tracing
    ///
    /// A theme file that fails to load is logged at warn level with the
    /// error; an unknown name falls through silently.
    ///
    /// # Example
    ///
    /// ```
    /// use gesture_ring::ui::Theme;
    /// use std::path::Path;
    ///
    /// let theme = Theme::resolve(Some("lavender-day"), Some(Path::new("/nonexistent.toml")));
    /// assert_eq!(theme.name, "lavender-day");
    /// assert_eq!(Theme::resolve(Some("neon"), None), Theme::default());
    /// ```
    #[must_use]
    pub fn resolve(theme_name: Option<&str>, theme_file: Option<&Path>) -> Self {
        if let Some(path) = theme_file {
            match Self::from_file(path) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "falling back to built-in theme"),
            }
        }
        theme_name.and_then(Self::from_name).unwrap_or_default()
    }

    /// Converts a hex color to an RGB tuple. Returns white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape for a hex color.
    ///
    /// ```
    /// use gesture_ring::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#6366f1"), "\u{1b}[38;2;99;102;241m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold text.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Faint text.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `indigo-night` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in indigo-night theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("indigo-night").unwrap().name, "indigo-night");
        let day = Theme::from_name("lavender-day").unwrap();
        assert!(day.colors.header_bg.is_none());
        assert!(Theme::from_name("catppuccin").is_none());
    }

    #[test]
    fn fg_renders_truecolor_escape() {
        assert_eq!(Theme::fg("#6366f1"), "\u{1b}[38;2;99;102;241m");
        assert_eq!(Theme::bg("nonsense"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn theme_file_overrides_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let custom = include_str!("../../themes/lavender-day.toml").replace("lavender-day", "custom");
        file.write_all(custom.as_bytes()).unwrap();

        let theme = Theme::resolve(Some("indigo-night"), Some(file.path()));
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn unreadable_theme_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let theme = Theme::resolve(Some("lavender-day"), Some(&dir.path().join("missing.toml")));
        assert_eq!(theme.name, "lavender-day");
        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(GestureRingError::Theme(_))
        ));
    }
}

//! Per-user directory resolution.
//!
//! Both locations follow the platform conventions reported by `dirs`
//! (`~/.local/share` and `~/.config` on Linux). Either can be unavailable on
//! systems without a home directory, in which case the feature that needs it
//! is skipped.

use std::path::{Path, PathBuf};

/// Directory name used under the platform data and config directories.
pub const APP_DIR: &str = "gesture-ring";

/// Config file name inside [`config_dir`].
pub const CONFIG_FILE: &str = "config.toml";

/// Data directory for trace files, e.g. `~/.local/share/gesture-ring`.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|base| app_dir(&base))
}

/// Config directory, e.g. `~/.config/gesture-ring`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| app_dir(&base))
}

/// Path of the user config file, whether or not it exists.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// `base/gesture-ring`.
fn app_dir(base: &Path) -> PathBuf {
    base.join(APP_DIR)
}

/// Expands a leading `~` to the home directory. Other paths pass through.
///
/// Only `~` and `~/...` expand; `~user` is left as is. Without a home
/// directory the path is returned unchanged.
///
/// # Example
///
/// ```
/// use gesture_ring::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/etc/theme.toml"), PathBuf::from("/etc/theme.toml"));
/// assert_eq!(expand_tilde("~other/theme.toml"), PathBuf::from("~other/theme.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

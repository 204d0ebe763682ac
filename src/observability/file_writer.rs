//! Size-rotated append-only file.
//!
//! Each write appends one line. Before a write that finds the file above the
//! size limit, backups shift up by one (`name.2` → `name.3`, `name.1` →
//! `name.2`, current → `name.1`) and the oldest beyond the retention count is
//! dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file exceeds this many bytes (5 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size above which the next write rotates first.
    pub max_bytes: u64,
    /// Numbered backups kept; older ones are deleted.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_FILE_SIZE_BYTES,
            max_backups: MAX_BACKUP_FILES,
        }
    }
}

/// Thread-safe rotating line writer. The file is opened lazily on first write.
///
/// # Example
///
/// ```no_run
/// use gesture_ring::observability::file_writer::{RotatingFile, RotationPolicy};
///
/// let file = RotatingFile::new("/tmp/trace.json".into(), RotationPolicy::default());
/// file.write_line(r#"{"resourceSpans":[]}"#)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    path: PathBuf,
    policy: RotationPolicy,
    /// Open handle; dropped before a rotation.
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `path`. Nothing touches the filesystem until the
    /// first write.
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    /// Path of the current file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of backup number `n`, counting from 1 for the newest.
    #[must_use]
    pub fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if the lock is poisoned, or if rotating, opening, writing or
    /// flushing the file fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let full = fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.policy.max_bytes);
        if full {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file unavailable"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Shifts backups up by one and moves the current file to `.1`.
    ///
    /// With no backups allowed the current file is deleted instead.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.policy.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(dir: &Path) -> RotatingFile {
        let policy = RotationPolicy { max_bytes: 10, max_backups: 2 };
        RotatingFile::new(dir.join("trace.json"), policy)
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"), RotationPolicy::default());
        writer.write_line("a").unwrap();
        writer.write_line("b").unwrap();
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "a\nb\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = small(dir.path());
        for line in ["first-line", "second-line", "third-line", "fourth-line"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "fourth-line\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "third-line\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "second-line\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn backup_names_extend_the_file_name() {
        let writer = RotatingFile::new(PathBuf::from("/tmp/gesture-ring-otlp.json"), RotationPolicy::default());
        assert_eq!(writer.backup_path(2), PathBuf::from("/tmp/gesture-ring-otlp.json.2"));
    }
}

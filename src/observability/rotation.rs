//! Append-only line file with a single size-triggered backup.
//!
//! Once the file grows past its limit it is renamed to `<file>.1`, replacing
//! any older backup, and writing starts over in a fresh file. At most two
//! files ever exist, so trace output stays below roughly twice the limit.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Size after which the trace file is rotated (5 MB).
pub const DEFAULT_LIMIT_BYTES: u64 = 5 * 1024 * 1024;

/// Line writer that rotates its file by size.
///
/// The file is opened lazily on the first write, so construction never
/// touches the filesystem.
///
/// # Example
///
/// ```rust
/// use bookstacks::observability::rotation::RotatingFile;
///
/// let dir = tempfile::tempdir()?;
/// let mut file = RotatingFile::with_limit(dir.path().join("trace.json"), 8);
/// file.write_line("{\"first\":1}")?;
/// file.write_line("{\"second\":2}")?;
/// assert!(file.backup_path().exists());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    limit_bytes: u64,
    handle: Option<File>,
}

impl RotatingFile {
    /// Writer for `path` rotating at [`DEFAULT_LIMIT_BYTES`].
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, DEFAULT_LIMIT_BYTES)
    }

    /// Writer for `path` rotating once the file exceeds `limit_bytes`.
    #[must_use]
    pub const fn with_limit(path: PathBuf, limit_bytes: u64) -> Self {
        Self {
            path,
            limit_bytes,
            handle: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the previous file is kept after a rotation.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name: OsString = self.path.clone().into_os_string();
        name.push(".1");
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.rotate_if_full()?;

        if self.handle.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
            self.handle = Some(file);
        }

        if let Some(file) = self.handle.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn rotate_if_full(&mut self) -> io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.path) else {
            return Ok(());
        };
        if metadata.len() <= self.limit_bytes {
            return Ok(());
        }

        self.handle = None;
        let backup = self.backup_path();
        if backup.exists() {
            fs::remove_file(&backup)?;
        }
        fs::rename(&self.path, backup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_writes_stay_in_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RotatingFile::new(dir.path().join("t.json"));
        file.write_line("a").unwrap();
        file.write_line("b").unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "a\nb\n");
        assert!(!file.backup_path().exists());
    }

    #[test]
    fn only_one_backup_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RotatingFile::with_limit(dir.path().join("t.json"), 2);
        for line in ["one", "two", "three"] {
            file.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(file.backup_path()).unwrap(), "two\n");
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "three\n");
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 2);
    }
}

//! Filesystem helpers.
//!
//! - `write_atomic` - all-or-nothing file writes
//! - `normalize_path` - absolute path normalization

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `bytes` to `path` so that readers see either the old file or the
/// complete new one, never a truncated write.
///
/// Missing parent directories are created. The data goes to a temporary
/// file in the destination directory first and is then renamed into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = tempfile::NamedTempFile::new_in(parent)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first. Falls back to the path itself when absolute,
/// or to `cwd.join(path)` when relative (the path may not exist yet).
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

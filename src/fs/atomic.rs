//! Atomic file writes for output artifacts.
//!
//! Writes follow the temp-file-then-rename pattern:
//! 1. Write content to a temporary file in the target's directory
//! 2. Sync the file to disk
//! 3. Rename it over the target
//!
//! On POSIX, `rename()` atomically replaces the destination when source
//! and destination share a filesystem; since the temp file lives next to
//! the target, that always holds here. On Windows, `rename()` fails when
//! the destination exists, so the target is removed first; the window in
//! between is acceptable for a build tool that regenerates its outputs.
//!
//! On crash, a temporary file named `.{filename}.tmp` may remain.

use crate::error::{Result, SeamError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories as
/// needed. The target is never observable in a partially written state.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| SeamError::WriteError {
            path: path.to_path_buf(),
            reason: format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ),
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(path, &temp_path, content.as_bytes())?;
    replace_target(&temp_path, path)?;

    Ok(())
}

/// Temporary file path next to the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SeamError::WriteError {
            path: target.to_path_buf(),
            reason: "invalid file path".to_string(),
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to the temp file and sync it to disk.
fn write_and_sync(target: &Path, temp: &Path, content: &[u8]) -> Result<()> {
    let write_err = |reason: String| {
        // Don't leave the temp file behind on failure
        let _ = fs::remove_file(temp);
        SeamError::WriteError {
            path: target.to_path_buf(),
            reason,
        }
    };

    let mut file = File::create(temp)
        .map_err(|e| write_err(format!("failed to create temporary file: {}", e)))?;
    file.write_all(content)
        .map_err(|e| write_err(format!("failed to write temporary file: {}", e)))?;
    file.sync_all()
        .map_err(|e| write_err(format!("failed to sync temporary file: {}", e)))?;

    Ok(())
}

/// Move the temp file over the target.
fn replace_target(temp: &Path, target: &Path) -> Result<()> {
    // Windows rename() refuses to replace an existing destination.
    #[cfg(windows)]
    if target.exists() {
        let _ = fs::remove_file(target);
    }

    fs::rename(temp, target).map_err(|e| {
        let _ = fs::remove_file(temp);
        SeamError::WriteError {
            path: target.to_path_buf(),
            reason: format!("failed to replace target: {}", e),
        }
    })?;

    // Sync the parent directory so the rename itself is durable.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

//! Atomic file writes.
//!
//! Content goes to a hidden temporary file next to the target, is synced to
//! disk, then renamed over the target. Rename within one directory is atomic
//! on the platforms we support, so readers see either the old document or the
//! new one.
//!
//! A crash can leave a `.{filename}.{pid}.tmp` file behind; it is never read.

use crate::error::{Result, SpektError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpektError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Write `content` to `path`, failing if the file already exists.
///
/// The existence check and creation are a single filesystem operation, so two
/// concurrent callers cannot both succeed.
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;

    let mut file = File::options()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                SpektError::UserError(format!("file already exists: {}", path.display()))
            } else {
                SpektError::UserError(format!(
                    "failed to create '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

    file.write_all(content.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            SpektError::UserError(format!("failed to write '{}': {}", path.display(), e))
        })
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| {
                SpektError::UserError(format!(
                    "failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SpektError::UserError(format!("invalid file path: '{}'", target.display()))
        })?;
    let temp_name = format!(".{}.{}.tmp", filename, std::process::id());
    Ok(target.with_file_name(temp_name))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SpektError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            SpektError::UserError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

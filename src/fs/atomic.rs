//! Atomic replacement of the target file.
//!
//! All writes follow the same pattern:
//! 1. Write the new content to a temporary file in the same directory as
//!    the target (same-filesystem placement, so the final rename is atomic)
//! 2. Sync the temp file to disk
//! 3. Copy the original file's permission bits (fatal on failure) and
//!    owner/group (best-effort) onto the temp file
//! 4. Rename the temp file over the target
//!
//! The rename is the sole visible mutation point: a concurrent reader —
//! even one bypassing the lock — sees either the fully-old or fully-new
//! file, never a partial write. Any failure after the temp file is created
//! removes it before the error propagates; no temp files are leaked.

use crate::error::WriteError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `target` with `content`.
///
/// A missing target is fine — the file is created by the rename and keeps
/// the temp file's default permissions. An existing target contributes its
/// permission bits and ownership to the replacement.
pub fn replace_file(target: &Path, content: &str) -> Result<(), WriteError> {
    let temp_path = temp_path_for(target)?;

    write_and_sync(&temp_path, content)?;

    if let Err(e) = copy_file_attributes(target, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    rename_into_place(&temp_path, target)
}

/// Temp file path in the same directory as the target: `.<basename>.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf, WriteError> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let basename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| WriteError::TempFileCreateFailed {
            path: target.to_path_buf(),
            reason: "target has no usable file name".to_string(),
        })?;
    Ok(parent.join(format!(".{}.tmp", basename)))
}

fn write_and_sync(temp_path: &Path, content: &str) -> Result<(), WriteError> {
    let mut file = File::create(temp_path).map_err(|e| WriteError::TempFileCreateFailed {
        path: temp_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    file.write_all(content.as_bytes()).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        WriteError::SerializeFailed {
            path: temp_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(temp_path);
        WriteError::SerializeFailed {
            path: temp_path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

/// Copy permission bits and ownership from the target onto the temp file.
///
/// Permission-bit copy failure is fatal: silently changing a config file's
/// mode on rewrite is not acceptable. Ownership copy commonly requires
/// elevated privilege, so a chown failure is tolerated and logged.
fn copy_file_attributes(target: &Path, temp_path: &Path) -> Result<(), WriteError> {
    let metadata = match fs::metadata(target) {
        Ok(m) => m,
        // Fresh target: nothing to copy
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(WriteError::PermissionCopyFailed {
                path: temp_path.to_path_buf(),
                reason: format!("cannot stat '{}': {}", target.display(), e),
            });
        }
    };

    fs::set_permissions(temp_path, metadata.permissions()).map_err(|e| {
        WriteError::PermissionCopyFailed {
            path: temp_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let Err(e) = std::os::unix::fs::chown(
            temp_path,
            Some(metadata.uid()),
            Some(metadata.gid()),
        ) {
            tracing::debug!(
                "could not copy ownership onto '{}': {}",
                temp_path.display(),
                e
            );
        }
    }

    Ok(())
}

fn rename_into_place(temp_path: &Path, target: &Path) -> Result<(), WriteError> {
    fs::rename(temp_path, target).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        WriteError::RenameFailed {
            path: target.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // Persist the directory entry as well
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

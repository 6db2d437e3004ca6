//! Lock path derivation.
//!
//! Every process that locks the same target file must compute the same lock
//! path, no matter which working directory or relative path it was invoked
//! with. The derivation is therefore anchored on the *resolved absolute*
//! target path:
//!
//! - writable target directory: `<dir>/.<basename>.lock` (hidden sibling)
//! - otherwise: `<tmp>/inilock.<hash>.lock`, where `<hash>` is the first
//!   16 hex characters of the SHA-256 digest of the resolved target path
//!
//! The fallback directory is a fixed `/tmp` on Unix rather than the
//! `TMPDIR`-sensitive `std::env::temp_dir()`, so two processes with
//! different environments still agree on the path.

use crate::error::LockError;
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Compute the lock path for a target file.
pub fn lock_path_for(target: &Path) -> Result<PathBuf, LockError> {
    let resolved = resolve_target(target)?;

    // The resolved path always has a parent; `resolve_target` built it by
    // canonicalizing the containing directory.
    let dir = resolved.parent().unwrap_or(Path::new("/"));

    if is_dir_writable(dir) {
        let basename = resolved
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LockError::PathUnwritable {
                path: resolved.clone(),
                reason: "target has no usable file name".to_string(),
            })?;
        Ok(dir.join(format!(".{}.lock", basename)))
    } else {
        Ok(fallback_lock_path(&resolved))
    }
}

/// Resolve a target path to its canonical absolute form.
///
/// The target file may not exist yet (it is created lazily on first write),
/// so a missing file is resolved by canonicalizing its containing directory
/// and re-appending the file name. Symlinked routes to the same file resolve
/// to the same path, which keeps the lock-path invariant.
pub(crate) fn resolve_target(target: &Path) -> Result<PathBuf, LockError> {
    match target.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let parent = match target.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let file_name = target.file_name().ok_or_else(|| LockError::PathUnwritable {
                path: target.to_path_buf(),
                reason: "target has no file name".to_string(),
            })?;
            let parent = parent.canonicalize().map_err(|e| LockError::PathUnwritable {
                path: target.to_path_buf(),
                reason: format!("cannot resolve containing directory: {}", e),
            })?;
            Ok(parent.join(file_name))
        }
        Err(e) => Err(LockError::PathUnwritable {
            path: target.to_path_buf(),
            reason: format!("cannot resolve target path: {}", e),
        }),
    }
}

/// Lock path in the shared fallback directory, keyed by a hash of the
/// resolved target path. Content-independent: only the path matters.
pub(crate) fn fallback_lock_path(resolved: &Path) -> PathBuf {
    let digest = Sha256::digest(resolved.as_os_str().as_encoded_bytes());
    let hash: String = digest[..8].iter().map(|b| format!("{:02x}", b)).collect();
    fallback_lock_dir().join(format!("inilock.{}.lock", hash))
}

#[cfg(unix)]
fn fallback_lock_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

#[cfg(not(unix))]
fn fallback_lock_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Probe whether the current process can create files in `dir`.
///
/// Uses an exclusive-create probe file rather than inspecting permission
/// bits, which lies under ACLs and read-only mounts.
fn is_dir_writable(dir: &Path) -> bool {
    let probe = dir.join(format!(".inilock-probe.{}", std::process::id()));
    match OpenOptions::new().write(true).create_new(true).open(&probe) {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            true
        }
        // A leftover probe from a crashed run still proves writability
        Err(e) if e.kind() == ErrorKind::AlreadyExists => true,
        Err(_) => false,
    }
}

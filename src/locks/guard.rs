//! RAII lock guard.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Guard for a held cross-process lock.
///
/// Holds the open descriptor carrying the OS advisory lock. When dropped,
/// the descriptor is unlocked and closed and the lock file is deleted.
/// Release failures are logged, never propagated: a lock file that is
/// already gone means another process reclaimed it as stale, which is an
/// accepted race, not an error.
#[derive(Debug)]
pub struct LockGuard {
    /// Path to the lock file.
    path: PathBuf,

    /// Open descriptor holding the advisory lock. `None` once released.
    file: Option<File>,
}

impl LockGuard {
    pub(super) fn new(path: PathBuf, file: File) -> Self {
        Self {
            path,
            file: Some(file),
        }
    }

    /// Get the path to the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the lock before the guard goes out of scope.
    ///
    /// Equivalent to dropping the guard; provided for call sites that want
    /// the release to be visible in the code.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };

        // Unlock, then close. Both are advisory cleanup: closing the
        // descriptor drops the lock anyway.
        let _ = fs2::FileExt::unlock(&file);
        drop(file);

        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != ErrorKind::NotFound
        {
            tracing::warn!(
                "failed to remove lock file '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.release_inner();
    }
}

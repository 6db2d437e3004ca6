//! Lock acquisition: staleness reclaim, exclusive create, bounded retry.

use super::guard::LockGuard;
use super::path::lock_path_for;
use crate::error::LockError;
use crate::settings::Settings;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Acquire the exclusive cross-process lock for a target file.
///
/// The lock is a marker file at a path derived from the target (see
/// [`super::path`]) plus an OS-level exclusive advisory lock on its open
/// descriptor. Acquisition runs in four steps:
///
/// 1. If a lock file already exists and its mtime is older than the
///    staleness threshold, delete it and log a warning. Any lock past the
///    threshold is presumed abandoned — liveness is favored over strict
///    exclusion for a holder that is merely slow.
/// 2. Exclusively create the lock file with mode 0600. `AlreadyExists`
///    means another process holds it or won a reclaim race; that is the
///    normal contended path, not an error.
/// 3. Open the lock file and try a non-blocking advisory lock, retrying
///    up to `settings.retry_attempts` times with `settings.retry_delay()`
///    sleeps in between (~1 s worst case at the defaults).
/// 4. Exhausted retries fail with [`LockError::AcquisitionTimeout`].
///
/// Waiters are not queued: which of several contenders wins a free lock is
/// unspecified.
pub fn acquire(target: &Path, settings: &Settings) -> Result<LockGuard, LockError> {
    let lock_path = lock_path_for(target)?;

    reclaim_if_stale(&lock_path, settings.stale_after());
    create_marker(&lock_path)?;

    let file = open_lock_file(&lock_path)?;

    for attempt in 1..=settings.retry_attempts {
        match file.try_lock_exclusive() {
            Ok(()) => return Ok(LockGuard::new(lock_path, file)),
            Err(e) if is_contended(&e) => {
                tracing::debug!(
                    "lock '{}' contended (attempt {}/{})",
                    lock_path.display(),
                    attempt,
                    settings.retry_attempts
                );
                if attempt < settings.retry_attempts {
                    std::thread::sleep(settings.retry_delay());
                }
            }
            Err(e) => {
                return Err(LockError::CannotOpen {
                    path: lock_path,
                    reason: format!("advisory lock failed: {}", e),
                });
            }
        }
    }

    Err(LockError::AcquisitionTimeout {
        path: lock_path,
        attempts: settings.retry_attempts,
    })
}

/// Delete the lock file if its age exceeds the staleness threshold.
///
/// The age is computed from the file's mtime, the sole staleness signal.
/// Deletion happens without confirming that no process still holds the
/// advisory lock, so a legitimate holder slower than the threshold can be
/// wrongly reclaimed; exclusive create in [`create_marker`] ensures at most
/// one reclaimer wins the re-create race.
fn reclaim_if_stale(lock_path: &Path, stale_after: Duration) {
    let Ok(metadata) = fs::metadata(lock_path) else {
        return;
    };
    let Ok(modified) = metadata.modified() else {
        return;
    };

    let age = SystemTime::now()
        .duration_since(modified)
        .unwrap_or(Duration::ZERO);
    if age <= stale_after {
        return;
    }

    tracing::warn!(
        "removing stale lock '{}' (age {}s exceeds {}s threshold)",
        lock_path.display(),
        age.as_secs(),
        stale_after.as_secs()
    );

    if let Err(e) = fs::remove_file(lock_path)
        && e.kind() != ErrorKind::NotFound
    {
        // Another contender may have deleted it first; anything else is
        // surfaced when the create/open below fails.
        tracing::debug!("stale lock removal failed: {}", e);
    }
}

/// Exclusively create the lock marker file, restricted to the owner.
///
/// Mode 0600 keeps other non-privileged users from forging or tampering
/// with the lock. `AlreadyExists` is success from the caller's perspective:
/// someone holds the lock (or just reclaimed it) and the normal retry path
/// takes over.
fn create_marker(lock_path: &Path) -> Result<(), LockError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    match options.open(lock_path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(LockError::PathUnwritable {
            path: parent_of(lock_path),
            reason: e.to_string(),
        }),
        Err(e) => Err(LockError::CannotOpen {
            path: lock_path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn open_lock_file(lock_path: &Path) -> Result<File, LockError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(lock_path)
        .map_err(|e| LockError::CannotOpen {
            path: lock_path.to_path_buf(),
            reason: e.to_string(),
        })
}

fn is_contended(e: &std::io::Error) -> bool {
    e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

fn parent_of(path: &Path) -> PathBuf {
    path.parent().unwrap_or(Path::new("/")).to_path_buf()
}

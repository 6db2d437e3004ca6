//! Cross-process locking for target files.
//!
//! This module implements the mutual-exclusion half of the protocol: an
//! exclusive advisory lock tied deterministically to a target file path.
//!
//! # Lock Files
//!
//! A lock is a zero-length marker file (mode 0600) at a path derived from
//! the resolved absolute target path, combined with an OS-level exclusive
//! advisory lock on the marker's open descriptor. Existence alone is not
//! "held" — the advisory lock is what excludes concurrent holders — but
//! existence plus mtime is what staleness detection works from.
//!
//! # Staleness
//!
//! A lock file whose mtime is older than the configured threshold
//! (120 s by default) is presumed abandoned by a crashed process and is
//! force-deleted by the next acquirer. There is no heartbeat renewal, so a
//! legitimate holder slower than the threshold risks being reclaimed; the
//! protocol deliberately trades strict exclusion for liveness here.
//!
//! # RAII Guards
//!
//! A successful acquisition returns a [`LockGuard`] that unlocks, closes,
//! and deletes the lock file when dropped, on every exit path. Release
//! failures are logged, never propagated.

mod acquire;
mod guard;
mod path;


// Re-export public API
pub use acquire::acquire;
pub use guard::LockGuard;
pub use path::lock_path_for;

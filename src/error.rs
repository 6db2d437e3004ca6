//! Error types for inilock.
//!
//! Errors are grouped into four buckets (lock, format, data, write) plus a
//! usage bucket. Each bucket maps to a distinct process exit code so scripts
//! can branch on the outcome without parsing messages. All failures surface
//! as typed values to the immediate caller; nothing is silently swallowed.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Failures acquiring the cross-process lock.
#[derive(Error, Debug)]
pub enum LockError {
    /// The directory that should hold the lock file refuses writes.
    /// Not retried.
    #[error("lock path '{}' is not writable: {reason}", path.display())]
    PathUnwritable { path: PathBuf, reason: String },

    /// The lock file could not be opened or locked for a reason other
    /// than contention. Not retried.
    #[error("cannot open lock file '{}': {reason}", path.display())]
    CannotOpen { path: PathBuf, reason: String },

    /// Every non-blocking attempt found the lock held by another process.
    #[error("timed out acquiring lock '{}' after {attempts} attempts", path.display())]
    AcquisitionTimeout { path: PathBuf, attempts: u32 },
}

/// Failures reading or validating the target file.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The target file does not exist.
    #[error("file not found: '{}'", .0.display())]
    FileMissing(PathBuf),

    /// The target file exists but could not be read.
    #[error("file '{}' is not readable: {reason}", path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    /// The target file fails the structural check or contains a malformed line.
    #[error("'{}' is not a valid INI file: {reason}", path.display())]
    FormatInvalid { path: PathBuf, reason: String },
}

/// Lookup misses, distinguishable from hard errors and from empty values.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("section not found: [{0}]")]
    SectionNotFound(String),

    #[error("key '{key}' not found in section [{section}]")]
    KeyNotFound { section: String, key: String },
}

/// Failures while atomically replacing the target file.
///
/// Any of these leaves the original target untouched; the temporary file is
/// removed before the error propagates.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to create temporary file '{}': {reason}", path.display())]
    TempFileCreateFailed { path: PathBuf, reason: String },

    #[error("failed to write serialized content to '{}': {reason}", path.display())]
    SerializeFailed { path: PathBuf, reason: String },

    #[error("failed to replace '{}': {reason}", path.display())]
    RenameFailed { path: PathBuf, reason: String },

    #[error("failed to copy permission bits onto '{}': {reason}", path.display())]
    PermissionCopyFailed { path: PathBuf, reason: String },
}

/// Top-level error type for inilock operations.
#[derive(Error, Debug)]
pub enum InilockError {
    #[error(transparent)]
    Lock(#[from] LockError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Write(#[from] WriteError),

    /// Bad caller input: empty section/key names, invalid settings file.
    #[error("{0}")]
    Usage(String),
}

impl InilockError {
    /// Returns the exit code for this error's taxonomy bucket.
    pub fn exit_code(&self) -> i32 {
        match self {
            InilockError::Usage(_) => exit_codes::USAGE_ERROR,
            InilockError::Lock(_) => exit_codes::LOCK_FAILURE,
            InilockError::Format(_) => exit_codes::FORMAT_FAILURE,
            InilockError::Data(_) => exit_codes::DATA_FAILURE,
            InilockError::Write(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for inilock operations.
pub type Result<T> = std::result::Result<T, InilockError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lock_errors_map_to_lock_exit_code() {
        let err = InilockError::from(LockError::AcquisitionTimeout {
            path: PathBuf::from("/tmp/x.lock"),
            attempts: 10,
        });
        assert_eq!(err.exit_code(), exit_codes::LOCK_FAILURE);
    }

    #[test]
    fn format_errors_map_to_format_exit_code() {
        let err = InilockError::from(FormatError::FileMissing(PathBuf::from("a.ini")));
        assert_eq!(err.exit_code(), exit_codes::FORMAT_FAILURE);
    }

    #[test]
    fn data_errors_map_to_data_exit_code() {
        let err = InilockError::from(DataError::SectionNotFound("db".to_string()));
        assert_eq!(err.exit_code(), exit_codes::DATA_FAILURE);
    }

    #[test]
    fn write_errors_map_to_write_exit_code() {
        let err = InilockError::from(WriteError::RenameFailed {
            path: PathBuf::from("a.ini"),
            reason: "cross-device link".to_string(),
        });
        assert_eq!(err.exit_code(), exit_codes::WRITE_FAILURE);
    }

    #[test]
    fn usage_errors_map_to_usage_exit_code() {
        let err = InilockError::Usage("section name must not be empty".to_string());
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
    }

    #[test]
    fn key_not_found_is_distinct_from_section_not_found() {
        let section_miss = DataError::SectionNotFound("db".to_string());
        let key_miss = DataError::KeyNotFound {
            section: "db".to_string(),
            key: "port".to_string(),
        };
        assert!(matches!(section_miss, DataError::SectionNotFound(_)));
        assert!(matches!(key_miss, DataError::KeyNotFound { .. }));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = InilockError::from(DataError::KeyNotFound {
            section: "db".to_string(),
            key: "port".to_string(),
        });
        assert_eq!(err.to_string(), "key 'port' not found in section [db]");
    }
}

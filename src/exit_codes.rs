//! Exit code constants for the inilock CLI.
//!
//! One code per error-taxonomy bucket so calling scripts can branch on the
//! outcome without parsing stderr:
//! - 0: Success
//! - 1: Usage error (bad arguments, empty names, invalid settings)
//! - 2: Lock acquisition failure
//! - 3: Format failure (missing/unreadable/invalid target file)
//! - 4: Data failure (section or key not found)
//! - 5: Write failure (temp file, permissions, rename)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: bad arguments, empty section/key names, invalid settings file.
pub const USAGE_ERROR: i32 = 1;

/// Lock failure: the cross-process lock could not be acquired.
pub const LOCK_FAILURE: i32 = 2;

/// Format failure: target file missing, unreadable, or not valid INI.
pub const FORMAT_FAILURE: i32 = 3;

/// Data failure: the requested section or key does not exist.
pub const DATA_FAILURE: i32 = 4;

/// Write failure: the atomic replacement of the target file failed.
pub const WRITE_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USAGE_ERROR,
            LOCK_FAILURE,
            FORMAT_FAILURE,
            DATA_FAILURE,
            WRITE_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}

//! Filesystem utilities.
//!
//! The atomic write-to-temp-then-rename primitive lives here; it is what
//! keeps readers from ever observing a partially written target file.

pub mod atomic;

pub use atomic::replace_file;

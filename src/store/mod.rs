//! Lock-guarded operations over a target INI file.
//!
//! [`IniStore`] is the public operation surface: every read, write, delete,
//! and list call acquires the cross-process lock for the target, performs
//! its work, and releases the lock — on error paths too, via the RAII
//! guard. Mutations go through the validate-parse-mutate-serialize-
//! atomic-replace pipeline, so a reader never observes a half-written file.

mod read;
mod write;


use crate::error::Result;
use crate::locks;
use crate::settings::Settings;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Handle to one target INI file plus the lock-tuning settings.
///
/// An explicit value passed around by the caller — there is no process-wide
/// registry of open targets.
#[derive(Debug, Clone)]
pub struct IniStore {
    target: PathBuf,
    settings: Settings,
}

impl IniStore {
    pub fn new(target: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            target: target.into(),
            settings,
        }
    }

    /// The target file path.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Read a single value, trimmed of surrounding whitespace.
    pub fn read_value(&self, section: &str, key: &str) -> Result<String> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        read::value(&self.target, section, key)
    }

    /// Read a whole section as a key → value mapping.
    pub fn read_section(&self, section: &str) -> Result<BTreeMap<String, String>> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        read::section_map(&self.target, section)
    }

    /// Read the full two-level mapping.
    pub fn read_all(&self) -> Result<BTreeMap<String, BTreeMap<String, String>>> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        read::all(&self.target)
    }

    /// List section names.
    pub fn list_sections(&self) -> Result<Vec<String>> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        read::sections(&self.target)
    }

    /// List key names in a section.
    pub fn list_keys(&self, section: &str) -> Result<Vec<String>> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        read::keys(&self.target, section)
    }

    /// Insert or overwrite one value, creating the file and section as
    /// needed. Idempotent: writing the same value twice is not an error.
    pub fn write_value(&self, section: &str, key: &str, value: &str) -> Result<()> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        write::set_value(&self.target, section, key, value)
    }

    /// Delete one key; the section is removed entirely if it becomes empty.
    ///
    /// Returns whether the key existed — a miss is a normal outcome here,
    /// distinct from hard errors.
    pub fn delete_key(&self, section: &str, key: &str) -> Result<bool> {
        let _lock = locks::acquire(&self.target, &self.settings)?;
        write::remove_key(&self.target, section, key)
    }
}

//! Read-side operations. The caller holds the lock.

use crate::error::{DataError, FormatError, Result};
use crate::ini::{self, IniDocument};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load, structurally validate, and parse the target file.
pub(super) fn load_document(target: &Path) -> Result<IniDocument> {
    let content = read_target(target)?;
    ini::validate(&content, target)?;
    Ok(ini::parse(&content, target)?)
}

pub(super) fn read_target(target: &Path) -> Result<String> {
    match fs::read_to_string(target) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(FormatError::FileMissing(target.to_path_buf()).into())
        }
        Err(e) => Err(FormatError::FileUnreadable {
            path: target.to_path_buf(),
            reason: e.to_string(),
        }
        .into()),
    }
}

pub(super) fn value(target: &Path, section: &str, key: &str) -> Result<String> {
    let doc = load_document(target)?;

    let keys = doc
        .section(section)
        .ok_or_else(|| DataError::SectionNotFound(section.to_string()))?;

    let value = keys.get(key).ok_or_else(|| DataError::KeyNotFound {
        section: section.to_string(),
        key: key.to_string(),
    })?;

    Ok(value.clone())
}

pub(super) fn section_map(target: &Path, section: &str) -> Result<BTreeMap<String, String>> {
    let doc = load_document(target)?;

    doc.section(section)
        .cloned()
        .ok_or_else(|| DataError::SectionNotFound(section.to_string()).into())
}

pub(super) fn all(target: &Path) -> Result<BTreeMap<String, BTreeMap<String, String>>> {
    Ok(load_document(target)?.into_map())
}

pub(super) fn sections(target: &Path) -> Result<Vec<String>> {
    Ok(load_document(target)?.section_names())
}

pub(super) fn keys(target: &Path, section: &str) -> Result<Vec<String>> {
    let doc = load_document(target)?;

    let keys = doc
        .section(section)
        .ok_or_else(|| DataError::SectionNotFound(section.to_string()))?;

    Ok(keys.keys().cloned().collect())
}

//! Mutation operations. The caller holds the lock.

use super::read;
use crate::error::{FormatError, InilockError, Result};
use crate::fs as fs_atomic;
use crate::ini::{self, IniDocument};
use std::path::Path;

pub(super) fn set_value(target: &Path, section: &str, key: &str, value: &str) -> Result<()> {
    ensure_name("section", section)?;
    ensure_name("key", key)?;

    let mut doc = load_or_empty(target)?;
    doc.set(section, key, value);

    fs_atomic::replace_file(target, &ini::serialize(&doc))?;
    Ok(())
}

pub(super) fn remove_key(target: &Path, section: &str, key: &str) -> Result<bool> {
    ensure_name("section", section)?;
    ensure_name("key", key)?;

    // Unlike writes, a delete requires the file to exist
    let mut doc = read::load_document(target)?;

    let existed = doc.remove(section, key);
    if existed {
        fs_atomic::replace_file(target, &ini::serialize(&doc))?;
    }

    Ok(existed)
}

/// A missing target file is an empty starting structure, not an error; the
/// file is created lazily by the first write. An existing file that is
/// empty or whitespace-only gets the same treatment — deleting the last
/// key in the file leaves exactly that behind, and it must stay writable.
fn load_or_empty(target: &Path) -> Result<IniDocument> {
    match read::read_target(target) {
        Ok(content) if content.trim().is_empty() => Ok(IniDocument::new()),
        Ok(content) => {
            ini::validate(&content, target)?;
            Ok(ini::parse(&content, target)?)
        }
        Err(InilockError::Format(FormatError::FileMissing(_))) => Ok(IniDocument::new()),
        Err(e) => Err(e),
    }
}

fn ensure_name(what: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InilockError::Usage(format!(
            "{} name must not be empty",
            what
        )));
    }
    Ok(())
}

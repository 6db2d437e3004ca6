//! Parsing and structural validation of INI text.

use super::document::IniDocument;
use crate::error::FormatError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `[name]` on its own line, surrounding whitespace inside the brackets
/// ignored. An empty name does not match.
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\s*([^\[\]]+?)\s*\]$").expect("section regex"));

/// `key=value` with a non-empty key.
static KEY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^=]*[^=\s][^=]*=").expect("key=value regex"));

/// Minimal structural check applied before parsing.
///
/// A readable target must contain at least one section header and at least
/// one non-comment `key=value` line; anything less is reported as
/// [`FormatError::FormatInvalid`], distinct from a missing or unreadable
/// file.
pub fn validate(content: &str, path: &Path) -> Result<(), FormatError> {
    let mut has_section = false;
    let mut has_key_value = false;

    for raw in content.lines() {
        let line = raw.trim();
        if is_comment(line) {
            continue;
        }
        if SECTION_RE.is_match(line) {
            has_section = true;
        } else if KEY_VALUE_RE.is_match(line) {
            has_key_value = true;
        }
        if has_section && has_key_value {
            return Ok(());
        }
    }

    let reason = if !has_section {
        "no [section] header found"
    } else {
        "no key=value line found"
    };
    Err(FormatError::FormatInvalid {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    })
}

/// Parse the full file into its two-level mapping.
///
/// Blank lines and `#`/`;` comment lines are skipped. Values are trimmed of
/// surrounding whitespace and unquoted. A `key=value` line before any
/// section header, or a non-blank line that is none of header, comment, or
/// `key=value`, is malformed.
pub fn parse(content: &str, path: &Path) -> Result<IniDocument, FormatError> {
    let mut doc = IniDocument::new();
    let mut current: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if is_comment(line) {
            continue;
        }

        if let Some(caps) = SECTION_RE.captures(line) {
            let name = caps[1].to_string();
            doc.ensure_section(&name);
            current = Some(name);
            continue;
        }

        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim();
            let value = unquote(line[eq + 1..].trim());

            let Some(section) = current.as_deref() else {
                return Err(malformed(path, idx, "key=value before any [section] header"));
            };
            if key.is_empty() {
                return Err(malformed(path, idx, "empty key name"));
            }

            doc.set(section, key, &value);
            continue;
        }

        return Err(malformed(
            path,
            idx,
            "not a section header, comment, or key=value",
        ));
    }

    Ok(doc)
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
}

/// Strip one layer of double quotes and collapse doubled internal quotes.
///
/// Inverse of the writer's quoting policy: `"a;b"` → `a;b`, `"say ""hi"""`
/// → `say "hi"`. Unquoted values pass through untouched.
fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        raw[1..raw.len() - 1].replace("\"\"", "\"")
    } else {
        raw.to_string()
    }
}

fn malformed(path: &Path, line_idx: usize, reason: &str) -> FormatError {
    FormatError::FormatInvalid {
        path: path.to_path_buf(),
        reason: format!("line {}: {}", line_idx + 1, reason),
    }
}

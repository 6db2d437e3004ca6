//! Serialization back to INI text.
//!
//! Output is regenerated from the in-memory structure: one `[name]` header
//! per section, one `key=value` line per key, a blank line between
//! sections. Comments and blank-line formatting from the original file are
//! not preserved — rewriting the file drops them, which is documented,
//! observable behavior.

use super::document::IniDocument;

/// Serialize a document to INI text.
pub fn serialize(doc: &IniDocument) -> String {
    let mut out = String::new();

    for (i, (name, keys)) in doc.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");

        for (key, value) in keys {
            out.push_str(key);
            out.push('=');
            if needs_quoting(value) {
                out.push_str(&quote(value));
            } else {
                out.push_str(value);
            }
            out.push('\n');
        }
    }

    out
}

/// A value containing a quote, `;`, or `#` would be misparsed as starting a
/// comment or a new literal; such values are emitted quoted.
fn needs_quoting(value: &str) -> bool {
    value.contains(['"', ';', '#'])
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

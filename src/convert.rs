//! Typed-value coercion at the presentation boundary.
//!
//! The storage core deals only in strings. When a caller asks for typed
//! output, this pure function guesses the narrowest type for a raw value.
//! It is applied strictly at the boundary — nothing below the CLI layer
//! ever sees a `TypedValue`.

use serde_json::Value;

/// A value as presented to typed consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Coerce a raw string to the narrowest matching type.
///
/// `true`/`false`/`yes`/`no` (case-insensitive) become booleans, then
/// integers, then finite floats; everything else stays text.
pub fn coerce(raw: &str) -> TypedValue {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" => return TypedValue::Bool(true),
        "false" | "no" => return TypedValue::Bool(false),
        _ => {}
    }

    if let Ok(i) = raw.parse::<i64>() {
        return TypedValue::Int(i);
    }

    if let Ok(f) = raw.parse::<f64>()
        && f.is_finite()
    {
        return TypedValue::Float(f);
    }

    TypedValue::Text(raw.to_string())
}

impl TypedValue {
    /// Render as a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            TypedValue::Bool(b) => Value::Bool(*b),
            TypedValue::Int(i) => Value::from(*i),
            TypedValue::Float(f) => Value::from(*f),
            TypedValue::Text(s) => Value::String(s.clone()),
        }
    }
}

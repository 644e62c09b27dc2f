//! Type-level views over `serde_json::Value` used by the matcher.
//!
//! Objects and arrays are treated alike: an array's own keys are its index
//! strings (`"0"`, `"1"`, ...), so `{"0": 1}` and `[1]` expose the same keys.

use std::borrow::Cow;

use serde_json::{Number, Value};

/// The closed set of expected values the matcher knows how to compare.
#[derive(Debug, Clone, Copy)]
pub enum Expected<'a> {
    Boolean(bool),
    Number(f64),
    String(&'a str),
    /// Object or array; carries the original value for key access.
    Object(&'a Value),
}

impl<'a> Expected<'a> {
    /// `None` for values outside the supported set (`null`).
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Expected::Boolean(*b)),
            Value::Number(n) => Some(Expected::Number(number_to_f64(n))),
            Value::String(s) => Some(Expected::String(s)),
            Value::Array(_) | Value::Object(_) => Some(Expected::Object(value)),
            Value::Null => None,
        }
    }
}

pub fn number_to_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

/// The JavaScript `typeof` of a JSON value; arrays and null are `"object"`.
pub fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}

/// Precise kind name, used where `typeof` would be ambiguous.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

pub fn own_key_count(value: &Value) -> usize {
    match value {
        Value::Array(a) => a.len(),
        Value::Object(m) => m.len(),
        _ => 0,
    }
}

/// Own keys with their values, in iteration order (indices for arrays,
/// document order for objects).
pub fn entries(value: &Value) -> Vec<(Cow<'_, str>, &Value)> {
    match value {
        Value::Array(a) => a
            .iter()
            .enumerate()
            .map(|(i, v)| (Cow::Owned(i.to_string()), v))
            .collect(),
        Value::Object(m) => m.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v)).collect(),
        _ => Vec::new(),
    }
}

/// Own-key lookup. Array keys must be canonical indices (`"1"`, not `"01"`).
pub fn get_key<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(m) => m.get(key),
        Value::Array(a) => {
            let idx = key.parse::<usize>().ok()?;
            if idx.to_string() != key {
                return None;
            }
            a.get(idx)
        }
        _ => None,
    }
}

//! Loose (coercive) equality over JSON values.
//!
//! The table follows JavaScript's abstract equality restricted to the JSON
//! value space:
//!
//! - same-typed primitives compare by value (`NaN` never equals anything)
//! - `null` only equals `null`
//! - booleans become `1`/`0` before comparing
//! - a number against a string compares against the string's numeric value
//! - arrays and objects against a primitive compare through their string
//!   form (`[1,2]` is `"1,2"`, `{}` is `"[object Object]"`)
//! - two arrays/objects are equal only when they are the same value in memory

use std::borrow::Cow;

use itertools::Itertools;
use serde_json::Value;

use crate::value::number_to_f64;

enum Primitive<'a> {
    Bool(bool),
    Number(f64),
    String(Cow<'a, str>),
}

pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_to_f64(x) == number_to_f64(y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => std::ptr::eq(a, b),
        _ => primitive_eq(to_primitive(a), to_primitive(b)),
    }
}

/// Loose equality between a bare number and a JSON value.
pub fn loose_eq_number(n: f64, v: &Value) -> bool {
    match v {
        Value::Null => false,
        other => primitive_eq(Primitive::Number(n), to_primitive(other)),
    }
}

fn to_primitive(v: &Value) -> Primitive<'_> {
    match v {
        Value::Bool(b) => Primitive::Bool(*b),
        Value::Number(n) => Primitive::Number(number_to_f64(n)),
        Value::String(s) => Primitive::String(Cow::Borrowed(s.as_str())),
        other => Primitive::String(Cow::Owned(to_js_string(other))),
    }
}

fn primitive_eq(a: Primitive<'_>, b: Primitive<'_>) -> bool {
    match (a, b) {
        (Primitive::Bool(x), Primitive::Bool(y)) => x == y,
        (Primitive::Number(x), Primitive::Number(y)) => x == y,
        (Primitive::String(x), Primitive::String(y)) => x == y,
        (Primitive::Bool(x), other) => primitive_eq(Primitive::Number(bool_to_number(x)), other),
        (other, Primitive::Bool(y)) => primitive_eq(other, Primitive::Number(bool_to_number(y))),
        (Primitive::Number(n), Primitive::String(s)) | (Primitive::String(s), Primitive::Number(n)) => {
            n == string_to_number(&s)
        }
    }
}

fn bool_to_number(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

// Unicode White_Space minus NEL, plus the byte-order mark
fn is_js_whitespace(c: char) -> bool {
    c != '\u{0085}' && (c.is_whitespace() || c == '\u{feff}')
}

/// Numeric value of a string under strict whole-string conversion.
/// Blank strings are `0`; anything that is not entirely a number is `NaN`.
pub fn string_to_number(s: &str) -> f64 {
    let t = s.trim_matches(is_js_whitespace);
    if t.is_empty() {
        return 0.0;
    }
    if let Some(n) = parse_radix_literal(t) {
        return n;
    }
    match decimal_prefix(t) {
        Some(p) if p.len() == t.len() => parse_decimal(p),
        _ => f64::NAN,
    }
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
/// `"1.5px"` is `1.5`, `"px"` is `NaN`. No hex/octal/binary support.
pub fn parse_float(s: &str) -> f64 {
    let t = s.trim_start_matches(is_js_whitespace);
    decimal_prefix(t).map(parse_decimal).unwrap_or(f64::NAN)
}

/// `parse_float` applied to the string form of any JSON value.
pub fn parse_float_value(v: &Value) -> f64 {
    match v {
        Value::Number(n) => number_to_f64(n),
        Value::String(s) => parse_float(s),
        other => parse_float(&to_js_string(other)),
    }
}

fn parse_radix_literal(t: &str) -> Option<f64> {
    let bytes = t.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &t[2..];
    // an invalid digit after a radix prefix is NaN, not a decimal fallback
    Some(
        digits
            .chars()
            .try_fold(0f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
            .unwrap_or(f64::NAN),
    )
}

// Longest prefix that reads as `[sign] (Infinity | digits [. digits] [e [sign] digits])`.
fn decimal_prefix(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(&s[..i + "Infinity".len()]);
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - (i + 1);
        if digits + frac > 0 {
            i = j;
            digits += frac;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(&s[..i])
}

fn parse_decimal(p: &str) -> f64 {
    match p {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => p.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// String form of a value as used by loose equality and number parsing.
pub fn to_js_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(number_to_f64(n)),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render a number the way JavaScript prints it: `1`, `1.05`, `NaN`,
/// `Infinity`, `1e+21`, `1.5e-7`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{n}")
}

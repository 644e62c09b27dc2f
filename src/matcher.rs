//! The recursive structural matcher.
//!
//! Dispatch is driven by the type of the *expected* value. The first mismatch
//! anywhere in the tree aborts the comparison and is the only thing reported.

use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, trace};

use crate::coercion::{format_number, loose_eq, loose_eq_number, parse_float_value};
use crate::errors::{MatchError, Result};
use crate::options::MatchOptions;
use crate::value::{entries, get_key, is_object_like, kind_name, number_to_f64, own_key_count, type_of, Expected};

/// Keys from the root down to the value under comparison. Each descent
/// borrows its parent's frame, so sibling branches never see each other's keys.
#[derive(Clone, Copy, Default)]
struct Path<'a> {
    tail: Option<&'a Link<'a>>,
    depth: usize,
}

struct Link<'a> {
    parent: Path<'a>,
    key: &'a str,
}

impl<'a> Path<'a> {
    fn child(link: &'a Link<'a>) -> Self {
        Path { tail: Some(link), depth: link.parent.depth + 1 }
    }

    fn keys(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.depth);
        let mut cur = self.tail;
        while let Some(link) = cur {
            out.push(link.key.to_string());
            cur = link.parent.tail;
        }
        out.reverse();
        out
    }
}

/// Reusable comparison policy.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Check that `actual` structurally matches `expected`.
    pub fn compare(&self, actual: &Value, expected: &Value) -> Result<()> {
        debug!(
            strict = self.options.strict,
            case_sensitive = self.options.case_sensitive,
            error_threshold = self.options.error_threshold,
            max_depth = self.options.max_depth,
            "comparing values"
        );
        let res = self.compare_at(actual, expected, Path::default());
        if let Err(e) = &res {
            debug!(error = %e, "comparison failed");
        }
        res
    }

    fn compare_at(&self, actual: &Value, expected: &Value, path: Path<'_>) -> Result<()> {
        let Some(kind) = Expected::classify(expected) else {
            let body = format!("Unexpected datatype \"{}\"", kind_name(expected));
            return Err(MatchError::UnsupportedExpected(self.decorate(&body, path)));
        };
        match kind {
            Expected::Boolean(b) => self.compare_boolean(actual, expected, b, path),
            Expected::Number(n) => self.compare_number(actual, n, path),
            Expected::String(s) => self.compare_string(actual, expected, s, path),
            Expected::Object(obj) => self.compare_object(actual, obj, path),
        }
    }

    fn compare_boolean(&self, actual: &Value, expected: &Value, b: bool, path: Path<'_>) -> Result<()> {
        let equal = if self.options.strict {
            actual.as_bool() == Some(b)
        } else {
            loose_eq(actual, expected)
        };
        if equal {
            Ok(())
        } else {
            Err(self.mismatch(&format!("Expected boolean: {b}"), path))
        }
    }

    fn compare_number(&self, actual: &Value, expected: f64, path: Path<'_>) -> Result<()> {
        let actual_num = match actual {
            Value::Number(n) => number_to_f64(n),
            _ if self.options.strict => return Err(self.mismatch("Value should be a number", path)),
            _ => {
                let parsed = parse_float_value(actual);
                // the parse must not have dropped anything, e.g. "1abc" -> 1
                if !loose_eq_number(parsed, actual) {
                    return Err(self.mismatch("Unable to convert value to number", path));
                }
                parsed
            }
        };
        let error = (actual_num - expected).abs();
        if error <= self.options.error_threshold {
            return Ok(());
        }
        let body = format!(
            "Error between actual ({}) and expected ({}) exceeds threshold: {}",
            format_number(actual_num),
            format_number(expected),
            format_number(error)
        );
        Err(self.mismatch(&body, path))
    }

    fn compare_string(&self, actual: &Value, expected: &Value, s: &str, path: Path<'_>) -> Result<()> {
        if self.options.strict && !actual.is_string() {
            let body = format!("Expected a string but got {}", type_of(actual));
            return Err(self.mismatch(&body, path));
        }
        match actual {
            Value::String(a) if !self.options.case_sensitive => {
                if a.to_lowercase() == s.to_lowercase() {
                    Ok(())
                } else {
                    Err(self.mismatch("String values are not equal", path))
                }
            }
            _ if loose_eq(actual, expected) => Ok(()),
            _ => Err(self.mismatch("Value should be a string", path)),
        }
    }

    fn compare_object(&self, actual: &Value, expected: &Value, path: Path<'_>) -> Result<()> {
        if !is_object_like(actual) {
            return Err(self.mismatch("Actual value should be an object", path));
        }
        if own_key_count(actual) != own_key_count(expected) {
            return Err(self.mismatch("Expected and actual should have the same number of keys", path));
        }
        if path.depth > self.options.max_depth {
            debug!(depth = path.depth, max_depth = self.options.max_depth, "depth limit exceeded");
            return Err(MatchError::DepthLimitExceeded {
                max_depth: self.options.max_depth,
                path: path.keys(),
            });
        }
        for (key, expected_child) in entries(expected) {
            let Some(actual_child) = get_key(actual, &key) else {
                return Err(self.mismatch(&format!("Value should contain key {key}"), path));
            };
            let link = Link { parent: path, key: key.as_ref() };
            trace!(key = %key, depth = path.depth + 1, "descending");
            self.compare_at(actual_child, expected_child, Path::child(&link))?;
        }
        Ok(())
    }

    fn mismatch(&self, body: &str, path: Path<'_>) -> MatchError {
        MatchError::Mismatch(self.decorate(body, path))
    }

    // "[message] body (Context: a->b)"
    fn decorate(&self, body: &str, path: Path<'_>) -> String {
        let prefix = self
            .options
            .message
            .as_deref()
            .map(|m| format!("[{m}] "))
            .unwrap_or_default();
        let context = if path.depth == 0 {
            String::new()
        } else {
            format!(" (Context: {})", path.keys().iter().join("->"))
        };
        format!("{prefix}{body}{context}")
    }
}

/// Compare `actual` against `expected` under `options`.
///
/// Returns `Ok(())` on a match, [`MatchError::Mismatch`] on the first
/// difference, or [`MatchError::DepthLimitExceeded`] when nesting goes past
/// `options.max_depth`.
pub fn compare(actual: &Value, expected: &Value, options: &MatchOptions) -> Result<()> {
    Matcher::new(options.clone())?.compare(actual, expected)
}

//! Panicking helpers for use inside `#[test]` functions.

use pretty_assertions::Comparison;
use serde_json::Value;

use crate::matcher::compare;
use crate::options::MatchOptions;

/// Panic unless `actual` matches `expected` under `options`.
///
/// The panic message carries the matcher's failure text followed by a
/// line diff of the two documents.
#[track_caller]
pub fn assert_deep_equal(actual: &Value, expected: &Value, options: &MatchOptions) {
    if let Err(err) = compare(actual, expected, options) {
        panic!(
            "assertion failed: `actual` does not match `expected`\n{err}\n\n{}",
            Comparison::new(actual, expected)
        );
    }
}

/// `assert_deep_equal!(actual, expected)` or
/// `assert_deep_equal!(actual, expected, options)`.
///
/// ```
/// use deep_match::{assert_deep_equal, MatchOptions};
/// use serde_json::json;
///
/// assert_deep_equal!(json!({"n": "1"}), json!({"n": 1}));
/// assert_deep_equal!(json!("ABC"), json!("abc"), MatchOptions::new().with_case_sensitive(false));
/// ```
#[macro_export]
macro_rules! assert_deep_equal {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert::assert_deep_equal(&$actual, &$expected, &$crate::MatchOptions::default())
    };
    ($actual:expr, $expected:expr, $options:expr $(,)?) => {
        $crate::assert::assert_deep_equal(&$actual, &$expected, &$options)
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::MatchOptions;

    #[test]
    fn passes_on_match() {
        crate::assert_deep_equal!(json!({"a": [1, 2]}), json!({"a": [1, 2]}));
        crate::assert_deep_equal!(json!(1.05), json!(1), MatchOptions::new().with_error_threshold(0.1));
    }

    #[test]
    #[should_panic(expected = "Value should be a string (Context: name)")]
    fn panics_with_matcher_message() {
        crate::assert_deep_equal!(json!({"name": "bob"}), json!({"name": "alice"}));
    }

    #[test]
    #[should_panic(expected = "Exceeded depth limit")]
    fn panics_on_depth_limit() {
        let opts = MatchOptions::new().with_max_depth(0);
        crate::assert_deep_equal!(json!({"a": {"b": 1}}), json!({"a": {"b": 1}}), opts);
    }
}

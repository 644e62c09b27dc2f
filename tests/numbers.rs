use deep_match::{compare, MatchOptions};
use serde_json::json;

fn within(strict: bool) -> MatchOptions {
    MatchOptions::new().with_strict(strict).with_error_threshold(0.1)
}

#[test]
fn test_within_threshold_strict() {
    let opts = within(true);
    assert!(compare(&json!(1), &json!(1.05), &opts).is_ok());
    assert!(compare(&json!(1.05), &json!(1), &opts).is_ok());
    let err = compare(&json!("1"), &json!(1.05), &opts).unwrap_err();
    assert_eq!(err.to_string(), "Value should be a number");
}

#[test]
fn test_within_threshold_loose() {
    let opts = within(false);
    assert!(compare(&json!(1), &json!(1.05), &opts).is_ok());
    assert!(compare(&json!("1"), &json!(1.05), &opts).is_ok());
}

#[test]
fn test_beyond_threshold() {
    for strict in [true, false] {
        let opts = within(strict);
        assert!(compare(&json!(1), &json!(1.2), &opts).is_err());
        assert!(compare(&json!(1.2), &json!(1), &opts).is_err());
        assert!(compare(&json!("1"), &json!(1.2), &opts).is_err());
    }
}

#[test]
fn test_threshold_message() {
    let err = compare(&json!(1.2), &json!(1), &within(false)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error between actual (1.2) and expected (1) exceeds threshold: 0.19999999999999996"
    );
}

#[test]
fn test_default_threshold_is_exact() {
    let just_below = 1.0 - f64::EPSILON;
    for strict in [true, false] {
        let opts = MatchOptions::new().with_strict(strict);
        assert!(compare(&json!(1), &json!(1), &opts).is_ok());
        assert!(compare(&json!(just_below), &json!(1), &opts).is_err());
        assert!(compare(&json!(just_below.to_string()), &json!(1), &opts).is_err());
    }
    let strict = MatchOptions::new().with_strict(true);
    assert!(compare(&json!("1"), &json!(1), &strict).is_err());
    assert!(compare(&json!("1"), &json!(1), &MatchOptions::default()).is_ok());
}

#[test]
fn test_unconvertible_values() {
    let opts = MatchOptions::default();
    for actual in [json!("1abc"), json!("abc"), json!(true), json!(null), json!({"a": 1}), json!("\u{0085}1")] {
        let err = compare(&actual, &json!(1), &opts).unwrap_err();
        assert_eq!(err.to_string(), "Unable to convert value to number", "{actual}");
    }
}

#[test]
fn test_convertible_values() {
    let opts = MatchOptions::default();
    assert!(compare(&json!(" 42"), &json!(42), &opts).is_ok());
    assert!(compare(&json!("1e3"), &json!(1000), &opts).is_ok());
    assert!(compare(&json!([7]), &json!(7), &opts).is_ok());
    assert!(compare(&json!("-Infinity"), &json!(-1e308), &opts).is_err());
}

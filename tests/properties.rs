use deep_match::{compare, MatchOptions};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1e12f64..1e12).prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    // container nesting stays well under the default max depth
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn any_value_matches_itself(v in arb_json()) {
        prop_assert!(compare(&v, &v, &MatchOptions::default()).is_ok());
        prop_assert!(compare(&v, &v, &MatchOptions::new().with_strict(true)).is_ok());
    }

    #[test]
    fn strict_match_implies_loose_match(a in arb_json(), b in arb_json()) {
        if compare(&a, &b, &MatchOptions::new().with_strict(true)).is_ok() {
            prop_assert!(compare(&a, &b, &MatchOptions::default()).is_ok());
        }
    }

    #[test]
    fn case_only_differences_pass_case_insensitive(s in "[a-zA-Z ]{0,20}") {
        let opts = MatchOptions::new().with_case_sensitive(false);
        let upper = Value::String(s.to_uppercase());
        prop_assert!(compare(&upper, &Value::String(s), &opts).is_ok());
    }

    #[test]
    fn numbers_within_threshold_pass(x in -1e6f64..1e6, d in 0.0f64..0.5) {
        let opts = MatchOptions::new().with_error_threshold(1.0);
        prop_assert!(compare(&Value::from(x + d), &Value::from(x), &opts).is_ok());
    }
}

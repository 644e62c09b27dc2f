pub mod assert;
pub mod coercion;
pub mod errors;
mod matcher;
pub mod options;
pub mod value;

use serde_json::Value;

pub use errors::{MatchError, Result};
pub use matcher::{compare, Matcher};
pub use options::MatchOptions;

/// Convenience: parse both documents as JSON and compare them.
pub fn compare_json(actual: &str, expected: &str, options: &MatchOptions) -> Result<()> {
    let actual: Value = serde_json::from_str(actual)?;
    let expected: Value = serde_json::from_str(expected)?;
    compare(&actual, &expected, options)
}

use serde::Deserialize;

use crate::errors::{MatchError, Result};

/// Knobs for a single comparison.
///
/// Only the public policy lives here. Depth and key path are tracked by the
/// matcher itself, and unknown fields are rejected on deserialization so they
/// cannot be smuggled in from a JSON options file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchOptions {
    /// Compare strings case-sensitively.
    pub case_sensitive: bool,
    /// Largest absolute difference at which two numbers still match.
    pub error_threshold: f64,
    /// Deepest object level that may be descended into.
    pub max_depth: usize,
    /// Label prefixed to every failure as `[message] `.
    pub message: Option<String>,
    /// Disable type coercion.
    pub strict: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            error_threshold: 0.0,
            max_depth: 5,
            message: None,
            strict: false,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_error_threshold(mut self, error_threshold: f64) -> Self {
        self.error_threshold = error_threshold;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse options from a JSON document such as `{"errorThreshold": 0.01}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let opts: MatchOptions = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// The threshold must be a non-negative number; NaN would make every
    /// numeric comparison fail silently.
    pub fn validate(&self) -> Result<()> {
        if self.error_threshold.is_nan() || self.error_threshold < 0.0 {
            return Err(MatchError::InvalidOptions(format!(
                "errorThreshold must be >= 0, got {}",
                self.error_threshold
            )));
        }
        Ok(())
    }
}

use thiserror::Error;

// Errors produced by a comparison or by loading its inputs
#[derive(Debug, Error)]
pub enum MatchError {
    // Values differ; the message is already decorated with prefix and context
    #[error("{0}")]
    Mismatch(String),

    // Nesting went past `max_depth`. A configuration problem, not a value mismatch.
    #[error("Exceeded depth limit")]
    DepthLimitExceeded { max_depth: usize, path: Vec<String> },

    // Expected value has a type the matcher does not compare (only `null` today)
    #[error("{0}")]
    UnsupportedExpected(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, MatchError::Mismatch(_))
    }

    pub fn is_depth_limit(&self) -> bool {
        matches!(self, MatchError::DepthLimitExceeded { .. })
    }
}

// Type alias for results that use `MatchError` as the error type
pub type Result<T> = std::result::Result<T, MatchError>;

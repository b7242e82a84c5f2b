//! Error types for payload validation and status translation

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while interpreting an API payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required key is missing or a value has the wrong shape
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// The review status is not one of the known codes
    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),
}

impl CoreError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}

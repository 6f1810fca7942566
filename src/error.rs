//! Error type shared by every label operation.

use thiserror::Error;

/// Errors reported by a [`ScoreLabel`](crate::ScoreLabel) and its configuration.
#[derive(Debug, Error)]
pub enum LabelError {
    /// An argument would push a non-finite or out-of-range value into the counter.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The label was already disposed.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_kind() {
        let err = LabelError::InvalidArgument("factor must not be zero".into());
        assert_eq!(err.to_string(), "invalid argument: factor must not be zero");

        let err = LabelError::InvalidState("label disposed".into());
        assert_eq!(err.to_string(), "invalid state: label disposed");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: LabelError = parse.unwrap_err().into();
        assert!(matches!(err, LabelError::Config(_)));
    }
}

//! Error handling module for the lext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. Lexical errors found in the
//! analyzed source are not failures of the tool; they only become a
//! [`LextError`] when the user asks for `--fail-on-errors`.

use thiserror::Error;

/// Main error type for the lext CLI.
#[derive(Error, Debug)]
pub enum LextError {
    /// Configuration-related errors (missing file, bad TOML, logging setup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Standard IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The analyzed source contained lexical errors
    #[error("{0} lexical error(s) found")]
    LexicalErrors(usize),
}

/// Result type alias for lext operations.
pub type Result<T> = std::result::Result<T, LextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LextError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = LextError::Validation("invalid input".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid input");
    }

    #[test]
    fn test_lexical_errors_display() {
        let err = LextError::LexicalErrors(3);
        assert_eq!(err.to_string(), "3 lexical error(s) found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let lext_err: LextError = io_err.into();
        assert!(matches!(lext_err, LextError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let lext_err: LextError = json_err.into();
        assert!(matches!(lext_err, LextError::Json(_)));
    }
}

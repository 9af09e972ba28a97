//! Custom error types for SpentSmart
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for SpentSmart operations
#[derive(Error, Debug)]
pub enum SpentSmartError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Category selection outside the registry
    #[error("Invalid category number {index}: choose between 1 and {count}")]
    InvalidCategoryIndex { index: usize, count: usize },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Errors reading back an exported file
    #[error("Import error: {0}")]
    Import(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpentSmartError {
    /// Create a validation error for an amount that is not accepted
    pub fn invalid_amount(what: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation(format!("{} {}", what, reason))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidCategoryIndex { .. }
        )
    }
}

impl From<std::io::Error> for SpentSmartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpentSmartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for SpentSmart operations
pub type SpentSmartResult<T> = Result<T, SpentSmartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpentSmartError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_category_index_error() {
        let err = SpentSmartError::InvalidCategoryIndex { index: 9, count: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid category number 9: choose between 1 and 5"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_amount() {
        let err = SpentSmartError::invalid_amount("Expense amount", "must be positive");
        assert_eq!(
            err.to_string(),
            "Validation error: Expense amount must be positive"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SpentSmartError = io_err.into();
        assert!(matches!(err, SpentSmartError::Io(_)));
        assert!(!err.is_validation());
    }
}

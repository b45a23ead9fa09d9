//! Custom error types for pocketbook-cli
//!
//! This module defines the error hierarchy for the client using thiserror
//! for ergonomic error definitions. The failure families of the remote
//! data service (transport, non-success status, malformed numeric input)
//! each get their own variant so the CLI layer can report them distinctly.
//! There are no retries anywhere; every error is terminal for the single
//! user action that produced it.

use thiserror::Error;

/// The main error type for pocketbook-cli operations
#[derive(Error, Debug)]
pub enum PocketbookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Network-level failure talking to the data service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The data service answered with a non-success status
    #[error("Service returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// The data service answered with a body we could not decode
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Statement upload rejected by the data service
    #[error("Upload failed: {0}")]
    Upload(String),
}

impl PocketbookError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget items (positional address)
    pub fn item_not_found(category: &str, index: usize) -> Self {
        Self::NotFound {
            entity_type: "Budget item",
            identifier: format!("{}[{}]", category, index),
        }
    }

    /// Create a "not found" error for investment accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a status error for an endpoint
    pub fn status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for PocketbookError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<crate::models::MoneyParseError> for PocketbookError {
    fn from(err: crate::models::MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for pocketbook-cli operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PocketbookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_status_error() {
        let err = PocketbookError::status("/budget_data", 500);
        assert_eq!(err.to_string(), "Service returned 500 for /budget_data");
    }

    #[test]
    fn test_not_found_error() {
        let err = PocketbookError::category_not_found("Rent");
        assert_eq!(err.to_string(), "Category not found: Rent");
        assert!(err.is_not_found());

        let err = PocketbookError::item_not_found("Rent", 2);
        assert_eq!(err.to_string(), "Budget item not found: Rent[2]");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PocketbookError = io_err.into();
        assert!(matches!(err, PocketbookError::Io(_)));
    }
}

//! Error handling for the library domain

use thiserror::Error;

/// Result alias used throughout the library domain.
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Every way a library operation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("validation error: {message}")]
    Validation { field: &'static str, message: String },

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("invalid state: {message}")]
    State { message: String },
}

impl LibraryError {
    /// Create a validation error for the named input field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a state transition error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Stable machine-readable code, used in log records.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::Conflict { .. } => "conflict",
            Self::NotFound { .. } => "not_found",
            Self::State { .. } => "invalid_state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = LibraryError::validation("title", "title cannot be empty");

        match &error {
            LibraryError::Validation { field, message } => {
                assert_eq!(*field, "title");
                assert_eq!(message, "title cannot be empty");
            }
            _ => panic!("Expected Validation error"),
        }
        assert_eq!(error.code(), "validation_error");
    }

    #[test]
    fn test_display_includes_kind_prefix() {
        assert_eq!(
            LibraryError::not_found("book with ID 9 does not exist").to_string(),
            "not found: book with ID 9 does not exist"
        );
        assert_eq!(
            LibraryError::conflict("a book with id 1 already exists").to_string(),
            "conflict: a book with id 1 already exists"
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            LibraryError::validation("name", "x").code(),
            LibraryError::conflict("x").code(),
            LibraryError::not_found("x").code(),
            LibraryError::state("x").code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

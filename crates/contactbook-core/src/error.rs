//! Unified error handling for the contact book core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories the CLI uses to pick messages and exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for contact book core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A field failed validation.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (lookups, storage).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl ContactBookError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::InvalidField,
            Self::Application(e) => e.category(),
        }
    }

    /// Whether a lookup by contact name failed.
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidField,
    NotFound,
    Storage,
    Internal,
}

/// Convenient result type alias.
pub type ContactBookResult<T> = Result<T, ContactBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_invalid_fields() {
        for domain in [
            DomainError::EmptyName,
            DomainError::InvalidPhone("1".into()),
            DomainError::InvalidBirthday("1.1.1".into()),
        ] {
            let err: ContactBookError = domain.into();
            assert_eq!(err.category(), ErrorCategory::InvalidField);
            assert!(!err.is_not_found());
        }
    }

    #[test]
    fn missing_contact_is_not_found() {
        let err: ContactBookError = ApplicationError::ContactNotFound {
            name: "Ann".into(),
        }
        .into();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Ann"));
    }

    #[test]
    fn suggestions_delegate_to_inner_error() {
        let err: ContactBookError = DomainError::InvalidBirthday("x".into()).into();
        assert!(err.suggestions().iter().any(|s| s.contains("DD.MM.YYYY")));
    }
}

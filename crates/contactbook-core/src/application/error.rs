//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Field validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No contact with this name.
    #[error("Contact '{name}' not found")]
    ContactNotFound { name: String },

    /// The book could not be read from or written to its store.
    #[error("Storage error at {path}: {reason}")]
    Storage { path: PathBuf, reason: String },

    /// The persisted snapshot could not be decoded or failed validation.
    #[error("Corrupt address book snapshot: {reason}")]
    CorruptSnapshot { reason: String },

    /// Store access failed (lock poisoned).
    #[error("Address book store is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ContactNotFound { name } => vec![
                format!("There is no contact named '{}'", name),
                "Names are case-sensitive; run 'all' to list contacts".into(),
                format!("Create it with: add {} <phone>", name),
            ],
            Self::Storage { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Use --book to point at a different file".into(),
            ],
            Self::CorruptSnapshot { .. } => vec![
                "The address book file is not a valid contact book".into(),
                "Restore it from a backup or move it aside to start fresh".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ContactNotFound { .. } => ErrorCategory::NotFound,
            Self::Storage { .. } | Self::CorruptSnapshot { .. } => ErrorCategory::Storage,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

// ============================================================================
// domain/error.rs - FIELD VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a field validation failure: the domain has no I/O and no
/// lookups that can fail, so "not found" lives in the application layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field")]
    EmptyName,

    #[error("Phone number {0} is not valid.")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Contact names cannot be blank".into()],
            Self::InvalidPhone(phone) => vec![
                format!("'{}' is not a 10-digit phone number", phone),
                "Use digits only, without '+', spaces or dashes".into(),
                "Example: 0501234567".into(),
            ],
            Self::InvalidBirthday(value) => vec![
                format!("'{}' is not a valid calendar date", value),
                "Birthdays are written as DD.MM.YYYY, e.g. 24.08.1991".into(),
            ],
        }
    }
}

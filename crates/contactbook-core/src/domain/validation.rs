use chrono::NaiveDate;

use crate::domain::error::DomainError;

/// `strftime` pattern for birthdays and congratulation dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Number of digits in a phone number.
pub const PHONE_LEN: usize = 10;

/// Centralized field validation.
///
/// The value objects in `value_objects.rs` are the only callers; everything
/// else constructs a `Name`, `Phone` or `Birthday` and gets validation for free.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }

    pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
        if phone.len() == PHONE_LEN && phone.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(DomainError::InvalidPhone(phone.to_string()))
        }
    }

    /// Parse a `DD.MM.YYYY` birthday, letting chrono enforce calendar ranges.
    ///
    /// chrono accepts single-digit fields and short or signed years, so the
    /// exact two-two-four digit shape is checked first.
    pub fn validate_birthday(value: &str) -> Result<NaiveDate, DomainError> {
        if !has_date_shape(value) {
            return Err(DomainError::InvalidBirthday(value.to_string()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| DomainError::InvalidBirthday(value.to_string()))
    }
}

/// `DD.MM.YYYY`: ten ASCII bytes, dots at 2 and 5, digits elsewhere.
fn has_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'.',
            _ => b.is_ascii_digit(),
        })
}

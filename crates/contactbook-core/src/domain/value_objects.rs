//! Domain value objects: Name, Phone, Birthday.
//!
//! # Design
//!
//! Each type can only be built through its validating constructor, so holding
//! one is proof the raw value passed `DomainValidator`. The raw validated value
//! is stored as-is; `Display` gives it back unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::error::DomainError;
use crate::domain::validation::{DATE_FORMAT, DomainValidator};

// ── Name ─────────────────────────────────────────────────────────────────────

/// A contact name. Non-blank; the primary key inside an `AddressBook`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        DomainValidator::validate_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Phone ────────────────────────────────────────────────────────────────────

/// Exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Result<Self, DomainError> {
        let phone = phone.into();
        DomainValidator::validate_phone(&phone)?;
        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ── Birthday ─────────────────────────────────────────────────────────────────

/// A birth date, entered and displayed as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        DomainValidator::validate_birthday(value).map(Self)
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

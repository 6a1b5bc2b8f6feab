//! Persisted representation of an [`AddressBook`].
//!
//! Plain strings in listing order. Turning a snapshot back into a book
//! re-runs every domain validation.

use serde::{Deserialize, Serialize};

use crate::{
    application::ApplicationError,
    domain::{AddressBook, Record},
    error::ContactBookResult,
};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The whole address book, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub version: u32,
    #[serde(default)]
    pub records: Vec<RecordSnapshot>,
}

/// One contact inside a [`BookSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl BookSnapshot {
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records: book.records().map(RecordSnapshot::from_record).collect(),
        }
    }

    /// Rebuild the book, validating every field.
    pub fn into_book(self) -> ContactBookResult<AddressBook> {
        if self.version != SNAPSHOT_VERSION {
            return Err(ApplicationError::CorruptSnapshot {
                reason: format!(
                    "unsupported version {} (expected {})",
                    self.version, SNAPSHOT_VERSION
                ),
            }
            .into());
        }

        let mut book = AddressBook::new();
        for record in self.records {
            book.add_record(record.into_record()?);
        }
        Ok(book)
    }

    /// Pretty-printed JSON.
    pub fn encode(&self) -> ContactBookResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ApplicationError::CorruptSnapshot {
                reason: format!("failed to encode: {e}"),
            }
            .into()
        })
    }

    pub fn decode(input: &str) -> ContactBookResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ApplicationError::CorruptSnapshot {
                reason: format!("failed to decode: {e}"),
            }
            .into()
        })
    }
}

impl RecordSnapshot {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
        }
    }

    fn into_record(self) -> ContactBookResult<Record> {
        let corrupt = |e: crate::domain::DomainError| ApplicationError::CorruptSnapshot {
            reason: format!("contact '{}': {e}", self.name),
        };

        let mut record = Record::new(&self.name, self.birthday.as_deref()).map_err(corrupt)?;
        for phone in &self.phones {
            record.add_phone(phone).map_err(corrupt)?;
        }
        Ok(record)
    }
}

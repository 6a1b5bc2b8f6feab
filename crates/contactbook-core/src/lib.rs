//! Contactbook Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the contactbook
//! command-line contact book, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         contactbook-cli (CLI)           │
//! │   (Command loop, config, logging)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ContactService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (BookStore)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    contactbook-adapters (Infrastructure)│
//! │   (JsonFileStore, InMemoryBookStore)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Record, AddressBook, birthdays)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use contactbook_core::domain::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! let mut bob = Record::new("Bob", Some("10.06.1990")).unwrap();
//! bob.add_phone("1234567890").unwrap();
//! book.add_record(bob);
//!
//! let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
//! let upcoming = book.upcoming_birthdays(saturday);
//! assert_eq!(upcoming[0].date_string(), "10.06.2024");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BookSnapshot, ContactSaved, ContactService, ports::BookStore,
    };
    pub use crate::domain::{
        AddressBook, Birthday, Name, Phone, PhoneAdded, PhoneEdited, Record, UpcomingBirthday,
    };
    pub use crate::error::{ContactBookError, ContactBookResult};
}

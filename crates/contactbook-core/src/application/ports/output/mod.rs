//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `contactbook-adapters` crate provides implementations.

use crate::domain::AddressBook;
use crate::error::ContactBookResult;

/// Port for loading and saving the whole address book.
///
/// Implemented by:
/// - `contactbook_adapters::store::JsonFileStore` (production)
/// - `contactbook_adapters::store::InMemoryBookStore` (testing)
///
/// ## Design Notes
///
/// - Whole-book granularity: load once at start, save at exit
/// - Missing storage is an empty book, not an error
#[cfg_attr(test, mockall::automock)]
pub trait BookStore: Send + Sync {
    /// Load the persisted book, or an empty one if nothing was saved yet.
    fn load(&self) -> ContactBookResult<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&self, book: &AddressBook) -> ContactBookResult<()>;

    /// Human-readable location, for logs and messages.
    fn location(&self) -> String;
}

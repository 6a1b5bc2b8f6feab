//! Application layer for the contact book.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ContactService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Snapshot**: The persisted representation of an address book
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;
pub mod snapshot;

// Re-export main services
pub use services::{ContactSaved, ContactService};

// Re-export port traits (for adapter implementation)
pub use ports::BookStore;

pub use error::ApplicationError;
pub use snapshot::{BookSnapshot, RecordSnapshot, SNAPSHOT_VERSION};

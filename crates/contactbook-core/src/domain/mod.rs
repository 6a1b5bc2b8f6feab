// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the contact book.
//!
//! This module contains pure business logic: field validation, the `Record`
//! entity, the `AddressBook` aggregate and the birthday calendar rules.
//! All I/O is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or clock access
//! - **No tracing**: Observability belongs to the outer layers
//! - **Validated values**: `Name`, `Phone`, `Birthday` cannot hold bad input
//!
// Public API - what the world sees
pub mod birthdays;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use birthdays::{DEFAULT_WINDOW_DAYS, UpcomingBirthday};
pub use entities::{AddressBook, Deletion, Insertion, PhoneAdded, PhoneEdited, Record};
pub use error::DomainError;
pub use validation::{DATE_FORMAT, DomainValidator, PHONE_LEN};
pub use value_objects::{Birthday, Name, Phone};

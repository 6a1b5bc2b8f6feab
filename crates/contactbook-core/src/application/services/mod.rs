//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a contact" or "list upcoming birthdays".

pub mod contact_service;

pub use contact_service::{ContactSaved, ContactService};

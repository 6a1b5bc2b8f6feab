//! Infrastructure adapters for contactbook.
//!
//! This crate implements the ports defined in
//! `contactbook-core::application::ports`. It contains all file I/O.

pub mod store;

// Re-export commonly used adapters
pub use store::{InMemoryBookStore, JsonFileStore};

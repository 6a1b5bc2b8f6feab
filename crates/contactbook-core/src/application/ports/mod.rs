//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `contactbook-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `BookStore`: Address book persistence
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The command loop in the CLI drives `ContactService` directly)

pub mod output;

pub use output::BookStore;

#[cfg(test)]
pub use output::MockBookStore;

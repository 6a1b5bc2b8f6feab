//! In-memory address book store for testing.

use std::sync::{Arc, RwLock};

use contactbook_core::{
    application::{ApplicationError, BookSnapshot, ports::BookStore},
    domain::AddressBook,
    error::ContactBookResult,
};

/// Thread-safe in-memory store.
///
/// Clones share the same snapshot, so a test can keep one handle and hand
/// another to the service under test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookStore {
    inner: Arc<RwLock<Option<BookSnapshot>>>,
}

impl InMemoryBookStore {
    /// Create an empty store (loads as an empty book).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(BookSnapshot::from_book(book)))),
        }
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<BookSnapshot> {
        self.inner.read().ok()?.clone()
    }

    /// The last saved snapshot as JSON (testing helper).
    pub fn encoded(&self) -> ContactBookResult<Option<String>> {
        self.snapshot().map(|s| s.encode()).transpose()
    }

    /// Forget any saved snapshot.
    pub fn clear(&self) -> ContactBookResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = None;
        Ok(())
    }
}

impl BookStore for InMemoryBookStore {
    fn load(&self) -> ContactBookResult<AddressBook> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        match inner.as_ref() {
            Some(snapshot) => snapshot.clone().into_book(),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> ContactBookResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = Some(BookSnapshot::from_book(book));
        Ok(())
    }

    fn location(&self) -> String {
        "memory".into()
    }
}

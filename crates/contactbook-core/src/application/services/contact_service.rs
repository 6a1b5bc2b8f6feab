//! Contact Service - main application orchestrator.
//!
//! Each public method is one user command: it looks the contact up, applies
//! the domain operation and reports a typed outcome. Formatting the outcome
//! for the terminal is left to the caller.

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::BookStore},
    domain::{
        AddressBook, Birthday, DEFAULT_WINDOW_DAYS, Deletion, Phone, PhoneEdited, Record,
        UpcomingBirthday,
    },
    error::ContactBookResult,
};

/// Outcome of [`ContactService::add_contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSaved {
    /// A new contact was created.
    Added,
    /// The contact existed; only the phone was appended.
    Updated,
}

/// Main contact book service.
///
/// Owns the in-memory book for the session and the store it came from.
pub struct ContactService {
    book: AddressBook,
    store: Box<dyn BookStore>,
    window_days: u32,
}

impl ContactService {
    /// Load the book from `store`.
    #[instrument(skip_all, fields(store = %store.location()))]
    pub fn open(store: Box<dyn BookStore>) -> ContactBookResult<Self> {
        let book = store.load()?;
        info!(contacts = book.len(), "Address book loaded");
        Ok(Self::with_book(book, store))
    }

    /// Wrap an already loaded book.
    pub fn with_book(book: AddressBook, store: Box<dyn BookStore>) -> Self {
        Self {
            book,
            store,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Override the upcoming-birthday window.
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Create the contact if needed, then append `phone` when given.
    ///
    /// The phone is validated first so a rejected command never leaves a
    /// half-created contact behind.
    #[instrument(skip(self))]
    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> ContactBookResult<ContactSaved> {
        if let Some(phone) = phone {
            Phone::new(phone)?;
        }

        let outcome = match self.book.find_mut(name) {
            Some(record) => {
                if let Some(phone) = phone {
                    record.add_phone(phone)?;
                }
                ContactSaved::Updated
            }
            None => {
                let mut record = Record::new(name, None)?;
                if let Some(phone) = phone {
                    record.add_phone(phone)?;
                }
                self.book.add_record(record);
                ContactSaved::Added
            }
        };

        debug!(?outcome, "Contact saved");
        Ok(outcome)
    }

    /// Replace `old` with `new` in the contact's phones.
    #[instrument(skip(self))]
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactBookResult<PhoneEdited> {
        let edited = self.record_mut(name)?.edit_phone(old, new)?;
        if edited.replaced == 0 {
            warn!(name, old, "No phone matched; nothing was changed");
        }
        Ok(edited)
    }

    /// Drop every occurrence of `phone` from the contact.
    #[instrument(skip(self))]
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactBookResult<usize> {
        Ok(self.record_mut(name)?.remove_phone(phone))
    }

    pub fn contact(&self, name: &str) -> ContactBookResult<&Record> {
        self.book.find(name).ok_or_else(|| not_found(name))
    }

    /// The contact's one-line description.
    pub fn show_phones(&self, name: &str) -> ContactBookResult<String> {
        Ok(self.contact(name)?.describe())
    }

    pub fn all_contacts(&self) -> impl Iterator<Item = &Record> {
        self.book.records()
    }

    #[instrument(skip(self))]
    pub fn add_birthday(&mut self, name: &str, date: &str) -> ContactBookResult<Birthday> {
        Ok(self.record_mut(name)?.add_birthday(date)?)
    }

    pub fn show_birthday(&self, name: &str) -> ContactBookResult<Option<Birthday>> {
        Ok(self.contact(name)?.birthday().copied())
    }

    /// Upcoming congratulations relative to `today`.
    pub fn birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let upcoming = self.book.upcoming_birthdays_within(today, self.window_days);
        debug!(%today, window = self.window_days, found = upcoming.len(), "Birthdays computed");
        upcoming
    }

    #[instrument(skip(self))]
    pub fn delete_contact(&mut self, name: &str) -> ContactBookResult<()> {
        match self.book.delete(name) {
            Deletion::Deleted => Ok(()),
            Deletion::NotFound => Err(not_found(name)),
        }
    }

    /// Persist the book through the store.
    #[instrument(skip_all, fields(store = %self.store.location()))]
    pub fn save(&self) -> ContactBookResult<()> {
        self.store.save(&self.book)?;
        info!(contacts = self.book.len(), "Address book saved");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn record_mut(&mut self, name: &str) -> ContactBookResult<&mut Record> {
        self.book.find_mut(name).ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> crate::error::ContactBookError {
    ApplicationError::ContactNotFound {
        name: name.to_string(),
    }
    .into()
}

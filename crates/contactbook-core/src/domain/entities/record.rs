//! The `Record` entity: one contact's name, phones and optional birthday.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{
    error::DomainError,
    value_objects::{Birthday, Name, Phone},
};

/// A single contact.
///
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Confirmation returned by [`Record::add_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneAdded {
    pub name: String,
    pub phone: Phone,
}

impl fmt::Display for PhoneAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone {} added to {}", self.phone, self.name)
    }
}

/// Confirmation returned by [`Record::edit_phone`].
///
/// `replaced` may be zero: editing a phone the contact does not have still
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdited {
    pub name: String,
    pub old: String,
    pub new: Phone,
    pub replaced: usize,
}

impl fmt::Display for PhoneEdited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone {} updated to {} in {}", self.old, self.new, self.name)
    }
}

impl Record {
    /// Create a contact with no phones.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, DomainError> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<PhoneAdded, DomainError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone.clone());
        Ok(PhoneAdded {
            name: self.name.to_string(),
            phone,
        })
    }

    /// Drop every phone equal to `phone`; returns how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace every phone equal to `old` with `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdited, DomainError> {
        let new = Phone::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = new.clone();
            replaced += 1;
        }
        Ok(PhoneEdited {
            name: self.name.to_string(),
            old: old.to_string(),
            new,
            replaced,
        })
    }

    pub fn find_phone(&self, phone: &str) -> Vec<&Phone> {
        self.phones.iter().filter(|p| p.as_str() == phone).collect()
    }

    /// Set or overwrite the birthday.
    pub fn add_birthday(&mut self, value: &str) -> Result<Birthday, DomainError> {
        let birthday = Birthday::parse(value)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{phone}")?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Record {
        Record::new("Ann", None).unwrap()
    }

    #[test]
    fn new_record_has_no_phones() {
        let record = ann();
        assert_eq!(record.name().as_str(), "Ann");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_validates_birthday() {
        assert!(Record::new("Ann", Some("31.02.2024")).is_err());
        let record = Record::new("Ann", Some("01.02.2000")).unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.02.2000");
    }

    #[test]
    fn new_rejects_blank_name() {
        assert_eq!(Record::new("  ", None), Err(DomainError::EmptyName));
    }

    #[test]
    fn describes_single_phone() {
        let mut record = ann();
        let added = record.add_phone("1234567890").unwrap();
        assert_eq!(added.to_string(), "Phone 1234567890 added to Ann");
        assert_eq!(record.describe(), "Contact name: Ann, phones: 1234567890");
    }

    #[test]
    fn describes_phones_and_birthday() {
        let mut record = ann();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_birthday("24.08.1991").unwrap();
        assert_eq!(
            record.describe(),
            "Contact name: Ann, phones: 1111111111; 2222222222, birthday: 24.08.1991"
        );
    }

    #[test]
    fn describe_is_stable() {
        let mut record = ann();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.describe(), record.describe());
    }

    #[test]
    fn add_phone_keeps_duplicates() {
        let mut record = ann();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.find_phone("1234567890").len(), 2);
    }

    #[test]
    fn add_phone_rejects_bad_input() {
        let mut record = ann();
        assert_eq!(
            record.add_phone("12345"),
            Err(DomainError::InvalidPhone("12345".into()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_drops_all_matches() {
        let mut record = ann();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.remove_phone("1111111111"), 2);
        assert_eq!(record.describe(), "Contact name: Ann, phones: 2222222222");
        assert_eq!(record.remove_phone("9999999999"), 0);
    }

    #[test]
    fn edit_phone_replaces_matches() {
        let mut record = ann();
        record.add_phone("1111111111").unwrap();
        let edited = record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(edited.replaced, 1);
        assert_eq!(
            edited.to_string(),
            "Phone 1111111111 updated to 3333333333 in Ann"
        );
        assert_eq!(record.phones()[0].as_str(), "3333333333");
    }

    #[test]
    fn edit_missing_phone_still_succeeds() {
        let mut record = Record::new("Bob", None).unwrap();
        record.add_phone("5555555555").unwrap();
        let edited = record.edit_phone("0000000000", "1111111111").unwrap();
        assert_eq!(edited.replaced, 0);
        assert_eq!(record.describe(), "Contact name: Bob, phones: 5555555555");
    }

    #[test]
    fn edit_phone_validates_new_value() {
        let mut record = ann();
        record.add_phone("1111111111").unwrap();
        assert!(record.edit_phone("1111111111", "abc").is_err());
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn add_birthday_overwrites() {
        let mut record = ann();
        record.add_birthday("01.01.2000").unwrap();
        record.add_birthday("02.02.2002").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.2002");
        assert!(record.add_birthday("2002-02-02").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.2002");
    }
}

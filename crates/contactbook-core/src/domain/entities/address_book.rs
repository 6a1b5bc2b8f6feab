//! The `AddressBook` aggregate root.
//!
//! Invariant: every key in `records` equals its record's name, and `order`
//! holds each key exactly once, in first-insertion order.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{
    birthdays::{self, DEFAULT_WINDOW_DAYS, UpcomingBirthday},
    entities::record::Record,
};

/// Contacts keyed by name, listed in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

/// Outcome of [`AddressBook::add_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// A record with the same name existed and was overwritten in place.
    Replaced,
}

/// Outcome of [`AddressBook::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    NotFound,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) -> Insertion {
        let key = record.name().to_string();
        match self.records.insert(key.clone(), record) {
            Some(_) => Insertion::Replaced,
            None => {
                self.order.push(key);
                Insertion::Inserted
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Deletion {
        match self.records.remove(name) {
            Some(_) => {
                self.order.retain(|key| key != name);
                Deletion::Deleted
            }
            None => Deletion::NotFound,
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays to congratulate within the next seven days of `reference`.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(reference, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays whose next occurrence is at most `window_days` after
    /// `reference`, sorted by congratulation date, then name.
    pub fn upcoming_birthdays_within(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<_> = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = birthdays::upcoming(birthday.date(), reference, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(name: &str, birthday: Option<&str>) -> Record {
        Record::new(name, birthday).unwrap()
    }

    #[test]
    fn add_then_find_returns_same_name() {
        let mut book = AddressBook::new();
        assert_eq!(book.add_record(record("Ann", None)), Insertion::Inserted);
        assert_eq!(book.find("Ann").unwrap().name().as_str(), "Ann");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn find_unknown_is_none() {
        let book = AddressBook::new();
        assert!(book.find("Unknown").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", None));
        book.add_record(record("Bob", None));
        assert_eq!(
            book.add_record(record("Ann", Some("01.01.2000"))),
            Insertion::Replaced
        );

        let names: Vec<_> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Ann", "Bob"]);
        assert!(book.find("Ann").unwrap().birthday().is_some());
    }

    #[test]
    fn delete_reports_outcome() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", None));
        assert_eq!(book.delete("Ann"), Deletion::Deleted);
        assert_eq!(book.delete("Ann"), Deletion::NotFound);
        assert_eq!(book.records().count(), 0);
    }

    #[test]
    fn find_mut_edits_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", None));
        book.find_mut("Ann").unwrap().add_phone("1234567890").unwrap();
        assert_eq!(
            book.find("Ann").unwrap().describe(),
            "Contact name: Ann, phones: 1234567890"
        );
    }

    #[test]
    fn upcoming_from_saturday() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", Some("10.06.2024")));

        let upcoming = book.upcoming_birthdays(date(8, 6, 2024));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Bob");
        assert_eq!(upcoming[0].date_string(), "10.06.2024");
    }

    #[test]
    fn upcoming_skips_records_without_birthday_or_out_of_window() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", None));
        book.add_record(record("Carl", Some("20.06.1990")));
        book.add_record(record("Dana", Some("01.06.1990")));

        assert!(book.upcoming_birthdays(date(8, 6, 2024)).is_empty());
    }

    #[test]
    fn upcoming_is_sorted_by_congratulation_date() {
        let mut book = AddressBook::new();
        book.add_record(record("Zed", Some("12.06.1980")));
        book.add_record(record("Sat", Some("08.06.1980")));
        book.add_record(record("Sun", Some("09.06.1980")));
        book.add_record(record("Amy", Some("10.06.1980")));

        let upcoming = book.upcoming_birthdays(date(7, 6, 2024));
        let rows: Vec<_> = upcoming
            .iter()
            .map(|u| (u.name.as_str(), u.date_string()))
            .collect();
        assert_eq!(
            rows,
            [
                ("Amy", "10.06.2024".to_string()),
                ("Sat", "10.06.2024".to_string()),
                ("Sun", "10.06.2024".to_string()),
                ("Zed", "12.06.2024".to_string()),
            ]
        );
    }

    #[test]
    fn upcoming_wraps_into_next_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Newt", Some("01.01.2001")));

        // 1 January 2025 is a Wednesday.
        let upcoming = book.upcoming_birthdays(date(27, 12, 2024));
        assert_eq!(upcoming[0].date_string(), "01.01.2025");
    }

    #[test]
    fn custom_window() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", Some("20.06.1990")));

        assert!(book.upcoming_birthdays(date(3, 6, 2024)).is_empty());
        assert_eq!(book.upcoming_birthdays_within(date(3, 6, 2024), 30).len(), 1);
    }
}

//! Calendar rules for birthday reminders.
//!
//! Pure functions only. `AddressBook::upcoming_birthdays` composes them; they
//! are public so the rules can be tested one at a time.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::domain::validation::DATE_FORMAT;

/// Reminder horizon used by `AddressBook::upcoming_birthdays`.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One row of the upcoming-birthdays report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn date_string(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

/// The birthday's anniversary in `year`.
///
/// 29 February falls back to 1 March in common years.
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// First anniversary on or after `reference`.
pub fn next_occurrence(birthday: NaiveDate, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, reference.year())?;
    if this_year < reference {
        anniversary_in(birthday, reference.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Saturday and Sunday occurrences are celebrated the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let shift = match occurrence.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    occurrence
        .checked_add_days(Days::new(shift))
        .unwrap_or(occurrence)
}

/// Congratulation date for `birthday` if its next occurrence is at most
/// `window_days` days after `reference`.
pub fn upcoming(birthday: NaiveDate, reference: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, reference)?;
    let days_until = occurrence.signed_duration_since(reference).num_days();
    (0..=i64::from(window_days))
        .contains(&days_until)
        .then(|| congratulation_date(occurrence))
}

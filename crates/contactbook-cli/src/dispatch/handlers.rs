//! Running a parsed [`Command`] against the contact service.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use contactbook_core::prelude::{ContactSaved, ContactService};

use super::Command;
use crate::error::CliResult;

/// What the assistant does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command.
    Continue(String),
    /// Save and leave.
    Exit,
}

/// Execute `command`, returning the text to print.
///
/// `today` is the reference date for `birthdays`.  Nothing is persisted
/// here; the caller saves when the session ends.
#[instrument(skip(service, today))]
pub fn dispatch(
    service: &mut ContactService,
    command: Command,
    today: NaiveDate,
) -> CliResult<Reply> {
    let text = match command {
        Command::Hello => "How can I help you?".to_string(),

        Command::Add { name, phone } => match service.add_contact(&name, phone.as_deref())? {
            ContactSaved::Added => format!("Contact {name} added."),
            ContactSaved::Updated => format!("Contact {name} updated."),
        },

        Command::Change { name, old, new } => service.change_phone(&name, &old, &new)?.to_string(),

        Command::Phone { name } => service.show_phones(&name)?,

        Command::All => {
            let lines: Vec<String> = service.all_contacts().map(|r| r.describe()).collect();
            if lines.is_empty() {
                "You dont have any contacts".to_string()
            } else {
                lines.join("\n")
            }
        }

        Command::AddBirthday { name, date } => {
            let birthday = service.add_birthday(&name, &date)?;
            format!("Birthday {birthday} added to {name}")
        }

        Command::ShowBirthday { name } => match service.show_birthday(&name)? {
            Some(birthday) => format!("{name}'s birthday is {birthday}"),
            None => format!("No birthday set for {name}"),
        },

        Command::Birthdays => {
            let upcoming = service.birthdays(today);
            if upcoming.is_empty() {
                format!(
                    "No upcoming birthdays within the next {} days.",
                    service.window_days()
                )
            } else {
                upcoming
                    .iter()
                    .map(|u| format!("Upcoming birthday: {} on {}", u.name, u.date_string()))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }

        Command::Delete { name } => {
            service.delete_contact(&name)?;
            format!("Record for {name} deleted.")
        }

        Command::RemovePhone { name, phone } => {
            let removed = service.remove_phone(&name, &phone)?;
            debug!(removed, "Phones removed");
            format!("Phone {phone} removed from {name}")
        }

        Command::Exit => return Ok(Reply::Exit),
    };

    Ok(Reply::Continue(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook_adapters::InMemoryBookStore;

    fn service() -> ContactService {
        ContactService::open(Box::new(InMemoryBookStore::new())).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()
    }

    fn run(service: &mut ContactService, line: &str) -> String {
        let command = Command::parse(line).unwrap().unwrap();
        match dispatch(service, command, saturday()) {
            Ok(Reply::Continue(text)) => text,
            Ok(Reply::Exit) => "<exit>".into(),
            Err(e) => e.one_line(),
        }
    }

    #[test]
    fn hello() {
        assert_eq!(run(&mut service(), "hello"), "How can I help you?");
    }

    #[test]
    fn add_then_update() {
        let mut s = service();
        assert_eq!(run(&mut s, "add Ann 0501234567"), "Contact Ann added.");
        assert_eq!(run(&mut s, "add Ann 0677654321"), "Contact Ann updated.");
        assert_eq!(
            run(&mut s, "phone Ann"),
            "Contact name: Ann, phones: 0501234567; 0677654321"
        );
    }

    #[test]
    fn add_with_invalid_phone() {
        let mut s = service();
        assert_eq!(
            run(&mut s, "add Ann 12345"),
            "Error: Phone number 12345 is not valid."
        );
        assert_eq!(run(&mut s, "all"), "You dont have any contacts");
    }

    #[test]
    fn change_phone_messages() {
        let mut s = service();
        run(&mut s, "add Bob 5555555555");
        assert_eq!(
            run(&mut s, "change Bob 5555555555 1111111111"),
            "Phone 5555555555 updated to 1111111111 in Bob"
        );
        // An unknown old phone still reports success.
        assert_eq!(
            run(&mut s, "change Bob 0000000000 2222222222"),
            "Phone 0000000000 updated to 2222222222 in Bob"
        );
        assert_eq!(run(&mut s, "phone Bob"), "Contact name: Bob, phones: 1111111111");
        assert_eq!(
            run(&mut s, "change Eve 0000000000 2222222222"),
            "Not existing user name"
        );
    }

    #[test]
    fn all_lists_in_insertion_order() {
        let mut s = service();
        run(&mut s, "add Zed 1111111111");
        run(&mut s, "add Ann 2222222222");
        assert_eq!(
            run(&mut s, "all"),
            "Contact name: Zed, phones: 1111111111\nContact name: Ann, phones: 2222222222"
        );
    }

    #[test]
    fn birthday_commands() {
        let mut s = service();
        run(&mut s, "add Bob");
        assert_eq!(run(&mut s, "show-birthday Bob"), "No birthday set for Bob");
        assert_eq!(
            run(&mut s, "add-birthday Bob 10.06.1990"),
            "Birthday 10.06.1990 added to Bob"
        );
        assert_eq!(run(&mut s, "show_birthday Bob"), "Bob's birthday is 10.06.1990");
        assert_eq!(
            run(&mut s, "add-birthday Bob 1990-06-10"),
            "Error: Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(run(&mut s, "show-birthday Eve"), "Not existing user name");
    }

    #[test]
    fn birthdays_lists_every_upcoming_contact() {
        let mut s = service();
        run(&mut s, "add Bob");
        run(&mut s, "add-birthday Bob 10.06.1990");
        run(&mut s, "add Ann");
        run(&mut s, "add-birthday Ann 09.06.1985");
        run(&mut s, "add Old");
        run(&mut s, "add-birthday Old 01.01.1970");
        assert_eq!(
            run(&mut s, "birthdays"),
            "Upcoming birthday: Ann on 10.06.2024\nUpcoming birthday: Bob on 10.06.2024"
        );
    }

    #[test]
    fn birthdays_when_none_are_upcoming() {
        assert_eq!(
            run(&mut service(), "birthdays"),
            "No upcoming birthdays within the next 7 days."
        );
    }

    #[test]
    fn delete_and_remove_phone() {
        let mut s = service();
        run(&mut s, "add Ann 0501234567");
        assert_eq!(
            run(&mut s, "remove-phone Ann 0501234567"),
            "Phone 0501234567 removed from Ann"
        );
        assert_eq!(run(&mut s, "delete Ann"), "Record for Ann deleted.");
        assert_eq!(run(&mut s, "delete Ann"), "Not existing user name");
    }

    #[test]
    fn exit_does_not_print() {
        assert_eq!(run(&mut service(), "exit"), "<exit>");
    }
}

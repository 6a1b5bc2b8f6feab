//! Turning an input line into a typed [`Command`].

use crate::error::{CliError, CliResult};

/// One assistant command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: Option<String>,
    },
    Change {
        name: String,
        old: String,
        new: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        date: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Delete {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The first word is the command, matched case-insensitively; the rest
    /// are whitespace-separated arguments.  Blank lines yield `Ok(None)`.
    /// Arguments beyond the ones a command takes are ignored.
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let keyword = first.to_lowercase();
        let mut args = Arguments {
            command: &keyword,
            usage: "",
            words,
        };

        let command = match keyword.as_str() {
            "hello" => Self::Hello,
            "all" => Self::All,
            "birthdays" => Self::Birthdays,
            "exit" | "close" => Self::Exit,
            "add" => {
                args.usage = "<name> [phone]";
                Self::Add {
                    name: args.required("name")?,
                    phone: args.optional(),
                }
            }
            "change" => {
                args.usage = "<name> <old phone> <new phone>";
                Self::Change {
                    name: args.required("name")?,
                    old: args.required("old phone")?,
                    new: args.required("new phone")?,
                }
            }
            "phone" => {
                args.usage = "<name>";
                Self::Phone {
                    name: args.required("name")?,
                }
            }
            "add-birthday" => {
                args.usage = "<name> <DD.MM.YYYY>";
                Self::AddBirthday {
                    name: args.required("name")?,
                    date: args.required("birthday")?,
                }
            }
            "show-birthday" | "show_birthday" => {
                args.usage = "<name>";
                Self::ShowBirthday {
                    name: args.required("name")?,
                }
            }
            "delete" => {
                args.usage = "<name>";
                Self::Delete {
                    name: args.required("name")?,
                }
            }
            "remove-phone" => {
                args.usage = "<name> <phone>";
                Self::RemovePhone {
                    name: args.required("name")?,
                    phone: args.required("phone")?,
                }
            }
            _ => {
                return Err(CliError::UnknownCommand {
                    command: args.command.to_string(),
                });
            }
        };

        Ok(Some(command))
    }
}

struct Arguments<'c, I> {
    command: &'c str,
    usage: &'static str,
    words: I,
}

impl<'w, I> Arguments<'_, I>
where
    I: Iterator<Item = &'w str>,
{
    fn required(&mut self, argument: &'static str) -> CliResult<String> {
        self.words
            .next()
            .map(str::to_string)
            .ok_or_else(|| CliError::MissingArgument {
                command: self.command.to_string(),
                argument,
                usage: self.usage,
            })
    }

    fn optional(&mut self) -> Option<String> {
        self.words.next().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(parse("HeLLo"), Command::Hello);
        assert_eq!(parse("  ALL  "), Command::All);
        assert_eq!(parse("Close"), Command::Exit);
    }

    #[test]
    fn arguments_keep_their_case() {
        assert_eq!(
            parse("ADD Ann 0501234567"),
            Command::Add {
                name: "Ann".into(),
                phone: Some("0501234567".into()),
            }
        );
    }

    #[test]
    fn add_phone_is_optional() {
        assert_eq!(
            parse("add Ann"),
            Command::Add {
                name: "Ann".into(),
                phone: None,
            }
        );
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(
            parse("phone Ann extra words"),
            Command::Phone { name: "Ann".into() }
        );
    }

    #[test]
    fn both_show_birthday_spellings() {
        let expected = Command::ShowBirthday { name: "Ann".into() };
        assert_eq!(parse("show-birthday Ann"), expected);
        assert_eq!(parse("show_birthday Ann"), expected);
    }

    #[test]
    fn missing_name_is_reported_as_name() {
        let err = Command::parse("phone").unwrap_err();
        assert_eq!(err.one_line(), "Enter user name.");
    }

    #[test]
    fn missing_later_argument_shows_usage() {
        let err = Command::parse("change Ann 0501234567").unwrap_err();
        assert_eq!(
            err.one_line(),
            "Error: change expects: <name> <old phone> <new phone>"
        );
        let err = Command::parse("add-birthday Ann").unwrap_err();
        assert_eq!(err.one_line(), "Error: add-birthday expects: <name> <DD.MM.YYYY>");
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("dance now").unwrap_err();
        assert!(matches!(err, CliError::UnknownCommand { ref command } if command == "dance"));
        assert_eq!(err.one_line(), "Invalid command.");
    }

    #[test]
    fn remove_phone_and_delete() {
        assert_eq!(
            parse("remove-phone Ann 0501234567"),
            Command::RemovePhone {
                name: "Ann".into(),
                phone: "0501234567".into(),
            }
        );
        assert_eq!(parse("delete Ann"), Command::Delete { name: "Ann".into() });
    }
}

//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, builder::FalseyValueParser};
use contactbook_core::domain::DomainValidator;

/// Global arguments for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (load/save messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress the banner and prompts; command replies are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).  Empty, `0`, `false`, `no` and `off`
    /// leave colour on; any other value turns it off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Address book file; overrides `storage.path` from the configuration.
    #[arg(
        short = 'b',
        long = "book",
        global = true,
        value_name = "FILE",
        env = "CONTACTBOOK_BOOK",
        help = "Address book file"
    )]
    pub book: Option<PathBuf>,

    /// Pretend today is this date when computing upcoming birthdays.
    #[arg(
        long = "today",
        global = true,
        value_name = "DD.MM.YYYY",
        value_parser = parse_date,
        hide = true
    )]
    pub today: Option<NaiveDate>,
}

impl GlobalArgs {
    /// The reference date for birthday reminders.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    DomainValidator::validate_birthday(value)
        .map_err(|_| format!("'{value}' is not a DD.MM.YYYY date"))
}

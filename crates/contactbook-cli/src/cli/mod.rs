//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "contactbook",
    bin_name = "contactbook",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Contact book with birthday reminders",
    long_about = "contactbook keeps names, phone numbers and birthdays, and \
                  tells you whose birthday to celebrate this week. Run it \
                  without a subcommand for the interactive assistant.",
    after_help = "EXAMPLES:\n\
        \x20 contactbook\n\
        \x20 contactbook exec add Ann 0501234567\n\
        \x20 contactbook exec birthdays\n\
        \x20 contactbook --book ~/contacts.json exec all",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the interactive assistant when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one assistant command, print its reply and save the book.
    #[command(
        visible_alias = "x",
        about = "Run a single assistant command",
        after_help = "EXAMPLES:\n\
            \x20 contactbook exec add Ann 0501234567\n\
            \x20 contactbook exec change Ann 0501234567 0677654321\n\
            \x20 contactbook exec add-birthday Ann 24.08.1991\n\
            \x20 contactbook exec all"
    )]
    Exec(ExecArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 contactbook completions bash > ~/.local/share/bash-completion/completions/contactbook\n\
            \x20 contactbook completions zsh  > ~/.zfunc/_contactbook\n\
            \x20 contactbook completions fish > ~/.config/fish/completions/contactbook.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 contactbook config get storage.path\n\
            \x20 contactbook config list\n\
            \x20 contactbook config path"
    )]
    Config(ConfigCommands),
}

// ── exec ──────────────────────────────────────────────────────────────────────

/// Arguments for `contactbook exec`.
#[derive(Debug, Args)]
pub struct ExecArgs {
    /// The command and its arguments, exactly as typed in the assistant.
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        help = "Assistant command and arguments"
    )]
    pub words: Vec<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `contactbook completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `contactbook config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["contactbook"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_exec_command() {
        let cli = Cli::parse_from(["contactbook", "exec", "add", "Ann", "0501234567"]);
        match cli.command {
            Some(Commands::Exec(args)) => assert_eq!(args.words, ["add", "Ann", "0501234567"]),
            other => panic!("expected Exec command, got {other:?}"),
        }
    }

    #[test]
    fn exec_requires_a_command() {
        assert!(Cli::try_parse_from(["contactbook", "exec"]).is_err());
    }

    #[test]
    fn global_book_flag_after_subcommand() {
        let cli = Cli::parse_from(["contactbook", "exec", "--book", "b.json", "all"]);
        assert_eq!(
            cli.global.book.as_deref(),
            Some(std::path::Path::new("b.json"))
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["contactbook", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }
}

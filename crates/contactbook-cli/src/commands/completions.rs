//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "contactbook";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = io::stdout();
    match args.shell {
        Shell::Bash => write_script(shells::Bash, &mut stdout),
        Shell::Zsh => write_script(shells::Zsh, &mut stdout),
        Shell::Fish => write_script(shells::Fish, &mut stdout),
        Shell::PowerShell => write_script(shells::PowerShell, &mut stdout),
        Shell::Elvish => write_script(shells::Elvish, &mut stdout),
    }
    Ok(())
}

fn write_script<G: Generator>(shell: G, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

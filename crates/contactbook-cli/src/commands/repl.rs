//! The interactive assistant loop.

use std::io::{self, BufRead};

use chrono::NaiveDate;
use tracing::{debug, instrument};

use contactbook_core::prelude::ContactService;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    dispatch::{Reply, handle_line},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const PROMPT: &str = "Enter a command: ";

/// Run the assistant on stdin until `exit`, `close` or end of input, then
/// save the book.
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut service = super::open_service(&global, &config)?;

    output.print("Welcome to the assistant bot!")?;
    let stdin = io::stdin();
    run_session(&mut service, stdin.lock(), &output, global.today())?;

    service.save()?;
    output.reply("Good bye!")?;
    Ok(())
}

/// Read commands from `input` and print replies until the session ends.
///
/// Command errors become one-line replies; only I/O failures abort.
fn run_session<R: BufRead>(
    service: &mut ContactService,
    mut input: R,
    output: &OutputManager,
    today: NaiveDate,
) -> CliResult<()> {
    let mut line = String::new();
    loop {
        output.prompt(PROMPT)?;
        line.clear();
        let read = input
            .read_line(&mut line)
            .with_cli_context(|| "Failed to read a command")?;
        if read == 0 {
            debug!("End of input");
            return Ok(());
        }

        match handle_line(service, &line, today) {
            Ok(None) => {}
            Ok(Some(Reply::Continue(text))) => output.reply(&text)?,
            Ok(Some(Reply::Exit)) => return Ok(()),
            Err(e) => {
                e.log();
                output.reply(&e.one_line())?;
            }
        }
    }
}

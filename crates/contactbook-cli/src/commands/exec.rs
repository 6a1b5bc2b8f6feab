//! `contactbook exec`: run one assistant command and save.

use tracing::instrument;

use crate::{
    cli::{ExecArgs, GlobalArgs},
    config::AppConfig,
    dispatch::{Reply, handle_line},
    error::CliResult,
    output::OutputManager,
};

/// Run the command spelled by `args.words`.
///
/// Unlike the interactive loop, a failing command is returned as an error
/// so the process exits non-zero.  The book is only saved on success.
#[instrument(skip_all, fields(command = args.words.first().map(String::as_str).unwrap_or_default()))]
pub fn execute(
    args: ExecArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut service = super::open_service(&global, &config)?;
    let line = args.words.join(" ");

    match handle_line(&mut service, &line, global.today())? {
        Some(Reply::Continue(text)) => output.reply(&text)?,
        Some(Reply::Exit) => output.reply("Good bye!")?,
        None => {}
    }

    service.save()?;
    Ok(())
}

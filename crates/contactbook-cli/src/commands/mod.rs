//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod exec;
pub mod repl;

use tracing::debug;

use contactbook_adapters::JsonFileStore;
use contactbook_core::prelude::ContactService;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Load the address book named by `--book` or `storage.path`.
fn open_service(global: &GlobalArgs, config: &AppConfig) -> CliResult<ContactService> {
    let path = config.book_path(global);
    debug!(path = %path.display(), "Opening address book");

    let service = ContactService::open(Box::new(JsonFileStore::new(path)))?
        .with_window_days(config.birthdays.window_days);
    Ok(service)
}

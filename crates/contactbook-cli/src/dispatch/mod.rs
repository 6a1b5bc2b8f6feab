//! The assistant's command layer: parse a line, run it, produce a reply.
//!
//! Both the interactive loop and `contactbook exec` go through
//! [`handle_line`], so a command behaves the same either way.

use chrono::NaiveDate;

use contactbook_core::prelude::ContactService;

use crate::error::CliResult;

mod handlers;
mod parser;

pub use handlers::{Reply, dispatch};
pub use parser::Command;

/// Parse and run one input line.  Blank lines yield `Ok(None)`.
pub fn handle_line(
    service: &mut ContactService,
    line: &str,
    today: NaiveDate,
) -> CliResult<Option<Reply>> {
    match Command::parse(line)? {
        Some(command) => dispatch(service, command, today).map(Some),
        None => Ok(None),
    }
}

//! Batch mode: run the commands given on the command line, in order

use crate::commands::{Command, CommandParser};
use crate::dispatch::Dispatcher;
use std::io::Write;

/// Run `tokens` as commands
///
/// The first error aborts the rest of the list. With no tokens at all the
/// player stops and starts the first audio track.
pub fn run<W: Write>(
    dispatcher: &mut Dispatcher<'_, W>,
    tokens: &[String],
) -> anyhow::Result<()> {
    if tokens.is_empty() {
        tracing::debug!("No commands, playing first audio track");
        dispatcher.execute(Command::Stop)?;
        dispatcher.execute(Command::Forward)?;
        return Ok(());
    }

    for command in CommandParser::new(tokens) {
        // `quit` has no meaning outside the prompt
        dispatcher.execute(command?)?;
    }

    Ok(())
}

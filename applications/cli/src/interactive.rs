//! Interactive mode: a `spindle> ` prompt reading one command line at a time

use crate::commands::CommandParser;
use crate::dispatch::{Dispatcher, Flow};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};

/// Prompt shown before each line
pub const PROMPT: &str = "spindle> ";

/// Where command lines come from
pub trait LineSource {
    /// Next line, or `None` at end of input
    fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Line editor with history, for terminals
pub struct Prompt {
    editor: DefaultEditor,
}

impl Prompt {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Prompt {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain buffered reader, for piped input
pub struct Script<R> {
    reader: R,
}

impl<R: BufRead> Script<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for Script<R> {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Read and run command lines until `quit` or end of input
///
/// Errors are reported on `errors` and the loop carries on; the rest of the
/// failing line is skipped.
pub fn run<W: Write, E: Write>(
    dispatcher: &mut Dispatcher<'_, W>,
    source: &mut impl LineSource,
    errors: &mut E,
) -> anyhow::Result<()> {
    while let Some(line) = source.next_line()? {
        for parsed in CommandParser::new(line.split_whitespace()) {
            let result = parsed
                .map_err(anyhow::Error::from)
                .and_then(|command| dispatcher.execute(command));

            match result {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => {
                    writeln!(errors, "Error: {:#}", e)?;
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_yields_lines_then_none() {
        let mut script = Script::new("dir\n\ninfo".as_bytes());
        assert_eq!(script.next_line().unwrap().as_deref(), Some("dir\n"));
        assert_eq!(script.next_line().unwrap().as_deref(), Some("\n"));
        assert_eq!(script.next_line().unwrap().as_deref(), Some("info"));
        assert_eq!(script.next_line().unwrap(), None);
    }
}

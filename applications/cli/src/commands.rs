//! Command words and their parser
//!
//! Commands are single tokens (`d`, `dir`, `+`, ...) optionally followed by
//! numeric arguments. Leading dashes are ignored, so `--stop`, `-s` and `s`
//! are the same command.

use thiserror::Error;

/// Command parsing and CLI-level failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Unrecognised option `{0}'")]
    UnknownCommand(String),

    #[error("`{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}': `{value}' is not a number")]
    InvalidNumber {
        command: &'static str,
        value: String,
    },

    #[error("Track {0} is not audio or out of range")]
    NotAudio(i64),
}

/// One player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List the table of contents
    Dir,
    /// Open the tray
    Eject,
    /// Close the tray
    Close,
    /// Print the usage table
    Help,
    /// Current track and track count
    Info,
    /// Pause if playing, resume if paused
    Pause,
    /// Stop playback
    Stop,
    /// Print the version line
    Version,
    /// Next audio track
    Forward,
    /// Previous audio track
    Back,
    /// Random audio track
    Random,
    /// Play a single track
    Play(i64),
    /// Play from a track to the end of the disc
    From(i64),
    /// Play a span of tracks
    Range(i64, i64),
    /// Report whether a track is audio
    Audio(i64),
    /// Print the volume
    Volume,
    /// Set left/right volume
    SetVolume(i64, i64),
    /// Print the playback state
    Status,
    /// Leave the prompt
    Quit,
    /// Bare track number: play from it if it is audio
    Track(i64),
}

/// Usage table printed by `help`
pub const USAGE: &str = "\
Usage: spindle [OPTIONS] [COMMAND | TRACK]...
	 d   dir        lists the CD directory
	 e   eject      opens the CD tray
	 c   close      closes the CD tray
	 h   help       displays this message
	 i   info       minimal info on the current CD
	 p   pause      pause/resume the CD
	 s   stop       stops the CD player
	 v   version    displays the software version
	 f   forward    play the next track on CD (also +)
	 b   back       play the previous track on CD (also -)
	 r   random     plays random track from the CD
	 t N play N     play track N only
	 F N from N     play from track N to the end of the CD
	 R A B range A B
	                play tracks A to B
	 a N audio N    tells whether track N is audio
	 V   volume     shows the volume
	 o L R setvol L R
	                sets the volume (0-255 per channel)
	 S   status     shows the playback state
	 q   quit       leaves interactive mode
	 N              play from track N if it is an audio track";

/// Parses commands out of a token stream, one at a time
///
/// A command's arguments are taken from the tokens that follow it, so
/// parsing stops being meaningful after the first error.
#[derive(Debug)]
pub struct CommandParser<I> {
    tokens: I,
}

impl<I, S> CommandParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Parse `tokens`
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }

    fn argument(
        &mut self,
        command: &'static str,
        argument: &'static str,
    ) -> Result<i64, CliError> {
        let token = self
            .tokens
            .next()
            .ok_or(CliError::MissingArgument { command, argument })?;
        let value = token.as_ref();

        value.parse().map_err(|_| CliError::InvalidNumber {
            command,
            value: value.to_string(),
        })
    }

    fn parse(&mut self, word: &str) -> Result<Command, CliError> {
        let command = match word {
            "d" | "dir" => Command::Dir,
            "e" | "eject" => Command::Eject,
            "c" | "close" => Command::Close,
            "h" | "help" => Command::Help,
            "i" | "info" => Command::Info,
            "p" | "pause" => Command::Pause,
            "s" | "stop" => Command::Stop,
            "v" | "version" => Command::Version,
            "f" | "+" | "forward" => Command::Forward,
            "b" | "-" | "back" => Command::Back,
            "r" | "random" => Command::Random,
            "t" | "play" => Command::Play(self.argument("play", "a track number")?),
            "F" | "from" => Command::From(self.argument("from", "a track number")?),
            "R" | "range" => {
                let start = self.argument("range", "a start track")?;
                let end = self.argument("range", "an end track")?;
                Command::Range(start, end)
            }
            "a" | "audio" => Command::Audio(self.argument("audio", "a track number")?),
            "V" | "volume" => Command::Volume,
            "o" | "setvol" => {
                let left = self.argument("setvol", "a left level")?;
                let right = self.argument("setvol", "a right level")?;
                Command::SetVolume(left, right)
            }
            "S" | "status" => Command::Status,
            "q" | "quit" => Command::Quit,
            other => match other.parse::<i64>() {
                Ok(track) if track != 0 => Command::Track(track),
                _ => return Err(CliError::UnknownCommand(other.to_string())),
            },
        };

        Ok(command)
    }
}

impl<I, S> Iterator for CommandParser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Command, CliError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        let word = strip_dashes(token.as_ref()).to_string();
        Some(self.parse(&word))
    }
}

/// Drop leading dashes, keeping a token made only of dashes intact
fn strip_dashes(token: &str) -> &str {
    match token.trim_start_matches('-') {
        "" => token,
        stripped => stripped,
    }
}

/// Parse every command in `tokens`, stopping at the first error
pub fn parse_all<S: AsRef<str>>(
    tokens: impl IntoIterator<Item = S>,
) -> Result<Vec<Command>, CliError> {
    CommandParser::new(tokens).collect()
}

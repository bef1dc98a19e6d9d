//! Command execution against an open session

use crate::commands::{CliError, Command, USAGE};
use crate::output::{self, OutputFormat};
use spindle_control::{
    DeviceSession, PlaybackController, TableOfContents, TrackNavigator, VolumeController,
};
use spindle_core::{CdError, TrackNumber};
use std::io::Write;

/// Version line printed by `version`
pub const VERSION: &str = concat!("spindle ", env!("CARGO_PKG_VERSION"));

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs commands, writing their output to `out`
pub struct Dispatcher<'s, W> {
    session: &'s DeviceSession,
    out: W,
    format: OutputFormat,
}

impl<'s, W: Write> Dispatcher<'s, W> {
    pub fn new(session: &'s DeviceSession, out: W, format: OutputFormat) -> Self {
        Self {
            session,
            out,
            format,
        }
    }

    /// Give back the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        tracing::debug!(?command, "executing");

        let toc = TableOfContents::new(self.session);
        let playback = PlaybackController::new(self.session);
        let navigator = TrackNavigator::new(self.session);
        let volume = VolumeController::new(self.session);

        match command {
            Command::Dir => {
                let entries = toc.entries()?;
                output::write_toc(&mut self.out, self.format, &entries)?;
            }
            Command::Eject => self.session.eject()?,
            Command::Close => self.session.close_tray()?,
            Command::Help => {
                writeln!(self.out, "{}", VERSION)?;
                writeln!(self.out, "{}", USAGE)?;
            }
            Command::Info => {
                let tracks = toc.track_count()?;
                let track = playback.current_track()?;
                output::write_info(&mut self.out, self.format, track, tracks)?;
            }
            Command::Pause => {
                playback.toggle_pause()?;
            }
            Command::Stop => playback.stop()?,
            Command::Version => writeln!(self.out, "{}", VERSION)?,
            Command::Forward => {
                navigator.forward_track()?;
            }
            Command::Back => {
                navigator.back_track()?;
            }
            Command::Random => {
                navigator.random_track()?;
            }
            Command::Play(track) => playback.play(track_number(track)?)?,
            Command::From(track) => playback.play_from(track_number(track)?)?,
            Command::Range(start, end) => {
                playback.play_range(track_number(start)?, track_number(end)?)?;
            }
            Command::Audio(track) => {
                let audio = toc.is_audio(track_number(track)?);
                output::write_audio(&mut self.out, self.format, track, audio)?;
            }
            Command::Volume => {
                let levels = volume.volume()?;
                output::write_volume(&mut self.out, self.format, levels)?;
            }
            Command::SetVolume(left, right) => {
                volume.set_volume(left, right)?;
            }
            Command::Status => {
                let subchannel = playback.subchannel()?;
                output::write_status(&mut self.out, self.format, &subchannel)?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Track(track) => {
                let audio = TrackNumber::try_from(track)
                    .ok()
                    .filter(|&t| t != 0 && toc.is_audio(t));
                match audio {
                    Some(t) => playback.play_from(t)?,
                    None => return Err(CliError::NotAudio(track).into()),
                }
            }
        }

        Ok(Flow::Continue)
    }
}

/// Check a user-supplied track number
fn track_number(track: i64) -> Result<TrackNumber, CdError> {
    TrackNumber::try_from(track)
        .ok()
        .filter(|&t| t != 0)
        .ok_or(CdError::InvalidTrack(track))
}

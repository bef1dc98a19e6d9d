//! Playback controller
//!
//! Issues play/pause/resume/stop commands and derives the playback state
//! (`Stopped`, `Playing(track)`, `Paused(track)`) from a subchannel read on
//! every call. Nothing is remembered between calls, so state changed with
//! the drive's own buttons is picked up immediately.

use crate::session::DeviceSession;
use crate::toc::TableOfContents;
use spindle_core::{CdError, PlaybackStatus, Result, Subchannel, TrackNumber};

/// Controls audio playback on the drive
#[derive(Debug, Clone, Copy)]
pub struct PlaybackController<'a> {
    session: &'a DeviceSession,
}

impl<'a> PlaybackController<'a> {
    /// Create a playback controller on `session`
    pub fn new(session: &'a DeviceSession) -> Self {
        Self { session }
    }

    /// Play a single track
    ///
    /// Range checking is left to the drive; a rejected track surfaces as
    /// `CdError::Device`.
    pub fn play(&self, track: TrackNumber) -> Result<()> {
        self.play_range(track, track)
    }

    /// Play tracks `start..=end`
    pub fn play_range(&self, start: TrackNumber, end: TrackNumber) -> Result<()> {
        tracing::debug!("Playing tracks {}-{}", start, end);
        self.session.drive()?.play_tracks(start, end)
    }

    /// Play from `track` to the end of the disc
    ///
    /// # Errors
    /// `CdError::OutOfRange` if `track` is past the last track; the drive is
    /// not commanded in that case.
    pub fn play_from(&self, track: TrackNumber) -> Result<()> {
        let range = TableOfContents::new(self.session).track_range()?;
        if track > range.last() {
            return Err(CdError::OutOfRange {
                track,
                last: range.last(),
            });
        }

        self.play_range(track, range.last())
    }

    /// Raw subchannel snapshot (status plus position)
    pub fn subchannel(&self) -> Result<Subchannel> {
        self.session.drive()?.read_subchannel()
    }

    /// Current playback state
    pub fn status(&self) -> Result<PlaybackStatus> {
        Ok(PlaybackStatus::from_subchannel(&self.subchannel()?))
    }

    /// Track being played, or 0 when stopped or paused
    pub fn current_track(&self) -> Result<TrackNumber> {
        Ok(self.status()?.current_track())
    }

    /// Check if playback is paused
    pub fn is_paused(&self) -> Result<bool> {
        Ok(self.status()?.is_paused())
    }

    /// Pause playback (harmless when already paused)
    pub fn pause(&self) -> Result<()> {
        self.session.drive()?.pause()
    }

    /// Resume playback if it is paused
    ///
    /// The paused check and the resume command are two separate drive
    /// calls; a button press in between is not guarded against.
    pub fn resume(&self) -> Result<()> {
        if self.is_paused()? {
            self.session.drive()?.resume()
        } else {
            tracing::debug!("Not paused, resume skipped");
            Ok(())
        }
    }

    /// Stop playback
    pub fn stop(&self) -> Result<()> {
        self.session.drive()?.stop()
    }

    /// Resume if paused, pause if playing, otherwise do nothing
    ///
    /// Returns the state the toggle acted on.
    pub fn toggle_pause(&self) -> Result<PlaybackStatus> {
        let status = self.status()?;
        match status {
            PlaybackStatus::Paused(_) => self.resume()?,
            PlaybackStatus::Playing(_) => self.pause()?,
            PlaybackStatus::Stopped => {}
        }
        Ok(status)
    }
}

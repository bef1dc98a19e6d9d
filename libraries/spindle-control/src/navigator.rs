//! Track navigation
//!
//! Picks the next, previous or a random audio track and starts playback
//! from it to the end of the disc. Data tracks are skipped, as are tracks
//! whose TOC entry cannot be read.

use crate::playback::PlaybackController;
use crate::session::DeviceSession;
use crate::toc::TableOfContents;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spindle_core::{CdError, Result, TrackNumber, TrackRange};
use std::time::{SystemTime, UNIX_EPOCH};

/// Random draws before falling back to a linear scan
const MAX_RANDOM_DRAWS: usize = 4096;

/// Moves playback between audio tracks
#[derive(Debug, Clone, Copy)]
pub struct TrackNavigator<'a> {
    toc: TableOfContents<'a>,
    playback: PlaybackController<'a>,
}

impl<'a> TrackNavigator<'a> {
    /// Create a navigator on `session`
    pub fn new(session: &'a DeviceSession) -> Self {
        Self {
            toc: TableOfContents::new(session),
            playback: PlaybackController::new(session),
        }
    }

    /// Play from the next audio track
    ///
    /// Starts after the current track (or at the first track when nothing is
    /// playing) and wraps past the last track.
    ///
    /// # Errors
    /// `CdError::NoAudioTracks` if a full pass finds no audio track.
    pub fn forward_track(&self) -> Result<TrackNumber> {
        let range = self.toc.track_range()?;
        let current = self.playback.current_track()?;

        let mut track = if current == 0 {
            range.first()
        } else {
            range.next_wrapping(current)
        };

        for _ in 0..range.count() {
            if self.toc.is_audio(track) {
                return self.start(track);
            }
            track = range.next_wrapping(track);
        }

        Err(CdError::NoAudioTracks)
    }

    /// Play from the previous audio track
    ///
    /// Steps back from the current track (or from the first track when
    /// nothing is playing), wrapping before the first track. The starting
    /// track is tested last.
    ///
    /// # Errors
    /// `CdError::NoAudioTracks` if no track on the disc is audio.
    pub fn back_track(&self) -> Result<TrackNumber> {
        let range = self.toc.track_range()?;
        let current = self.playback.current_track()?;

        let mut track = if current == 0 { range.first() } else { current };

        for _ in 0..range.count() {
            track = range.prev_wrapping(track);
            if self.toc.is_audio(track) {
                return self.start(track);
            }
        }

        Err(CdError::NoAudioTracks)
    }

    /// Play from a randomly chosen audio track
    ///
    /// Uses a generator seeded from the wall clock on every call.
    pub fn random_track(&self) -> Result<TrackNumber> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        let mut rng = StdRng::seed_from_u64(seed);

        self.random_track_with(&mut rng)
    }

    /// Play from an audio track drawn uniformly with `rng`
    ///
    /// # Errors
    /// `CdError::NoAudioTracks` if the disc has no audio track; checked
    /// before drawing.
    pub fn random_track_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TrackNumber> {
        let range = self.toc.track_range()?;
        if !self.toc.any_audio(range) {
            return Err(CdError::NoAudioTracks);
        }

        let mut track = range.first();
        for _ in 0..MAX_RANDOM_DRAWS {
            track = rng.gen_range(range.first()..=range.last());
            if self.toc.is_audio(track) {
                return self.start(track);
            }
        }

        tracing::debug!(
            "No audio track after {} draws, scanning from {}",
            MAX_RANDOM_DRAWS,
            track
        );
        self.scan_forward(range, track)
    }

    fn scan_forward(&self, range: TrackRange, from: TrackNumber) -> Result<TrackNumber> {
        let mut track = from;
        for _ in 0..range.count() {
            if self.toc.is_audio(track) {
                return self.start(track);
            }
            track = range.next_wrapping(track);
        }

        Err(CdError::NoAudioTracks)
    }

    fn start(&self, track: TrackNumber) -> Result<TrackNumber> {
        self.playback.play_from(track)?;
        tracing::debug!("Navigated to track {}", track);
        Ok(track)
    }
}

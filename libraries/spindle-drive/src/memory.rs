//! In-memory CD-ROM drive
//!
//! Emulates the audio-control behaviour of a drive holding a scripted disc:
//! a play command starts at the first track of the span, pause/resume move
//! between the playing and paused states, and the tray can be opened.
//!
//! `MemoryDrive` is the controlling side (build the disc, inspect the call
//! log, flip the state as if someone pressed a button on the drive). Handles
//! returned by [`DriveOpener::open`] share its state and count themselves,
//! so tests can check that a session never leaks one.

use spindle_core::{
    AudioStatus, CdDrive, CdError, DriveOpener, Msf, PlaybackStatus, Result, Subchannel,
    TocHeader, TrackNumber, TrackType, Volume,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A control call received by a memory drive handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum DriveCall {
    ReadTocHeader,
    ReadTocEntry(TrackNumber),
    PlayTracks(TrackNumber, TrackNumber),
    Pause,
    Resume,
    Stop,
    ReadSubchannel,
    ReadVolume,
    WriteVolume(Volume),
    Eject,
    CloseTray,
}

#[derive(Debug)]
struct DriveState {
    first_track: TrackNumber,
    tracks: Vec<TrackType>,
    disc_loaded: bool,
    tray_open: bool,
    audio_status: AudioStatus,
    track: TrackNumber,
    play_end: TrackNumber,
    absolute: Msf,
    relative: Msf,
    volume: Volume,
    unreadable: HashSet<TrackNumber>,
    toc_fails: bool,
    device: Option<PathBuf>,
    calls: Vec<DriveCall>,
    opens: usize,
    open_handles: usize,
}

impl DriveState {
    fn last_track(&self) -> TrackNumber {
        self.first_track + self.tracks.len() as TrackNumber - 1
    }

    fn has_medium(&self) -> bool {
        self.disc_loaded && !self.tray_open && !self.tracks.is_empty()
    }

    fn track_type(&self, track: TrackNumber) -> Option<TrackType> {
        if track < self.first_track {
            return None;
        }
        self.tracks
            .get((track - self.first_track) as usize)
            .copied()
    }

    fn require_medium(&self, op: &'static str) -> Result<()> {
        if self.has_medium() {
            Ok(())
        } else {
            Err(CdError::device(op, "No medium found"))
        }
    }
}

/// In-memory drive with a scripted disc
///
/// Cloning gives another controller for the same drive.
#[derive(Debug, Clone)]
pub struct MemoryDrive {
    state: Rc<RefCell<DriveState>>,
}

impl MemoryDrive {
    /// Drive holding a disc whose tracks start at `first_track`
    ///
    /// # Panics
    /// Panics if the disc would extend past track 99.
    pub fn new(first_track: TrackNumber, tracks: Vec<TrackType>) -> Self {
        assert!(first_track >= 1, "track numbers start at 1");
        assert!(
            first_track as usize + tracks.len() <= 100,
            "a CD holds at most 99 tracks"
        );

        Self {
            state: Rc::new(RefCell::new(DriveState {
                first_track,
                disc_loaded: !tracks.is_empty(),
                tracks,
                tray_open: false,
                audio_status: AudioStatus::NoStatus,
                track: 0,
                play_end: 0,
                absolute: Msf::default(),
                relative: Msf::default(),
                volume: Volume::new(Volume::MAX, Volume::MAX),
                unreadable: HashSet::new(),
                toc_fails: false,
                device: None,
                calls: Vec::new(),
                opens: 0,
                open_handles: 0,
            })),
        }
    }

    /// Drive with `count` audio tracks numbered from 1
    pub fn audio_disc(count: u8) -> Self {
        Self::new(1, vec![TrackType::Audio; count as usize])
    }

    /// Drive with no disc loaded
    pub fn empty() -> Self {
        Self::new(1, Vec::new())
    }

    /// Parse a layout string, one character per track from track 1:
    /// `A`/`a` for audio, `D`/`d` for data
    ///
    /// ```
    /// # use spindle_drive::MemoryDrive;
    /// let drive = MemoryDrive::from_layout("DDADA").unwrap();
    /// assert_eq!(drive.track_count(), 5);
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self> {
        let tracks = layout
            .chars()
            .map(|c| match c {
                'A' | 'a' => Ok(TrackType::Audio),
                'D' | 'd' => Ok(TrackType::Data),
                other => Err(CdError::config(format!(
                    "invalid track '{}' in disc layout (expected A or D)",
                    other
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        if tracks.len() > 99 {
            return Err(CdError::config("disc layout has more than 99 tracks"));
        }

        Ok(Self::new(1, tracks))
    }

    /// Only accept opens of `device`; any other path fails like a missing node
    #[must_use]
    pub fn with_device(self, device: impl Into<PathBuf>) -> Self {
        self.state.borrow_mut().device = Some(device.into());
        self
    }

    /// Make TOC entry reads for `track` fail
    pub fn make_unreadable(&self, track: TrackNumber) {
        self.state.borrow_mut().unreadable.insert(track);
    }

    /// Make TOC header reads fail (drive still answers other calls)
    pub fn fail_toc(&self, fail: bool) {
        self.state.borrow_mut().toc_fails = fail;
    }

    /// Force the playback state, as a button on the drive would
    pub fn set_status(&self, status: PlaybackStatus) {
        let mut state = self.state.borrow_mut();
        match status {
            PlaybackStatus::Stopped => {
                state.audio_status = AudioStatus::NoStatus;
                state.track = 0;
            }
            PlaybackStatus::Playing(track) => {
                state.audio_status = AudioStatus::Playing;
                state.track = track;
            }
            PlaybackStatus::Paused(track) => {
                state.audio_status = AudioStatus::Paused;
                state.track = track;
            }
        }
    }

    /// Move the laser to a position inside the current track
    ///
    /// Reported by subchannel reads while playing or paused. A play command
    /// resets it to the start of the disc.
    pub fn set_position(&self, absolute: Msf, relative: Msf) {
        let mut state = self.state.borrow_mut();
        state.absolute = absolute;
        state.relative = relative;
    }

    /// Playback status as the drive currently sees it
    pub fn status(&self) -> PlaybackStatus {
        let state = self.state.borrow();
        PlaybackStatus::from_subchannel(&Subchannel {
            audio_status: state.audio_status,
            track: state.track,
            ..Default::default()
        })
    }

    /// Last track of the most recent play command, if any
    pub fn play_end(&self) -> Option<TrackNumber> {
        let state = self.state.borrow();
        (state.play_end != 0).then_some(state.play_end)
    }

    /// Current volume
    pub fn volume(&self) -> Volume {
        self.state.borrow().volume
    }

    /// Number of tracks on the loaded disc
    pub fn track_count(&self) -> usize {
        self.state.borrow().tracks.len()
    }

    /// Whether the tray is open
    pub fn is_tray_open(&self) -> bool {
        self.state.borrow().tray_open
    }

    /// Every control call received so far, oldest first
    pub fn calls(&self) -> Vec<DriveCall> {
        self.state.borrow().calls.clone()
    }

    /// Spans of every play command received so far
    pub fn plays(&self) -> Vec<(TrackNumber, TrackNumber)> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                DriveCall::PlayTracks(start, end) => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    /// Forget the call log
    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Number of successful opens
    pub fn opens(&self) -> usize {
        self.state.borrow().opens
    }

    /// Number of handles currently open
    pub fn open_handles(&self) -> usize {
        self.state.borrow().open_handles
    }
}

impl DriveOpener for MemoryDrive {
    fn open(&self, device: &Path) -> Result<Box<dyn CdDrive>> {
        let mut state = self.state.borrow_mut();
        if let Some(expected) = &state.device {
            if expected != device {
                return Err(CdError::init(device, "No such file or directory"));
            }
        }

        state.opens += 1;
        state.open_handles += 1;
        tracing::debug!(device = %device.display(), "memory drive opened");

        Ok(Box::new(MemoryHandle {
            state: Rc::clone(&self.state),
        }))
    }
}

/// An open handle on a [`MemoryDrive`]
#[derive(Debug)]
struct MemoryHandle {
    state: Rc<RefCell<DriveState>>,
}

impl MemoryHandle {
    fn record(&self, call: DriveCall) -> std::cell::RefMut<'_, DriveState> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        state
    }
}

impl Drop for MemoryHandle {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.open_handles = state.open_handles.saturating_sub(1);
    }
}

impl CdDrive for MemoryHandle {
    fn read_toc_header(&self) -> Result<TocHeader> {
        let state = self.record(DriveCall::ReadTocHeader);
        state.require_medium("CDROMREADTOCHDR")?;
        if state.toc_fails {
            return Err(CdError::device("CDROMREADTOCHDR", "Input/output error"));
        }

        Ok(TocHeader {
            first_track: state.first_track,
            last_track: state.last_track(),
        })
    }

    fn read_toc_entry(&self, track: TrackNumber) -> Result<TrackType> {
        let state = self.record(DriveCall::ReadTocEntry(track));
        state.require_medium("CDROMREADTOCENTRY")?;
        if state.unreadable.contains(&track) {
            return Err(CdError::device("CDROMREADTOCENTRY", "Input/output error"));
        }

        state
            .track_type(track)
            .ok_or_else(|| CdError::device("CDROMREADTOCENTRY", "Invalid argument"))
    }

    fn play_tracks(&self, start: TrackNumber, end: TrackNumber) -> Result<()> {
        let mut state = self.record(DriveCall::PlayTracks(start, end));
        state.require_medium("CDROMPLAYTRKIND")?;

        let valid_span = start <= end
            && state.track_type(start).is_some()
            && state.track_type(end).is_some();
        if !valid_span {
            return Err(CdError::device("CDROMPLAYTRKIND", "Invalid argument"));
        }
        if state.track_type(start) == Some(TrackType::Data) {
            return Err(CdError::device("CDROMPLAYTRKIND", "Input/output error"));
        }

        state.audio_status = AudioStatus::Playing;
        state.track = start;
        state.play_end = end;
        state.absolute = Msf::default();
        state.relative = Msf::default();
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        let mut state = self.record(DriveCall::Pause);
        if state.audio_status == AudioStatus::Playing {
            state.audio_status = AudioStatus::Paused;
        }
        Ok(())
    }

    fn resume(&self) -> Result<()> {
        let mut state = self.record(DriveCall::Resume);
        if state.audio_status != AudioStatus::Paused {
            return Err(CdError::device("CDROMRESUME", "Input/output error"));
        }
        state.audio_status = AudioStatus::Playing;
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        let mut state = self.record(DriveCall::Stop);
        state.audio_status = AudioStatus::NoStatus;
        state.track = 0;
        Ok(())
    }

    fn read_subchannel(&self) -> Result<Subchannel> {
        let state = self.record(DriveCall::ReadSubchannel);
        let active = matches!(
            state.audio_status,
            AudioStatus::Playing | AudioStatus::Paused
        );

        Ok(Subchannel {
            audio_status: state.audio_status,
            track: if active { state.track } else { 0 },
            index: u8::from(active),
            absolute: if active { state.absolute } else { Msf::default() },
            relative: if active { state.relative } else { Msf::default() },
        })
    }

    fn read_volume(&self) -> Result<Volume> {
        let state = self.record(DriveCall::ReadVolume);
        Ok(state.volume)
    }

    fn write_volume(&self, volume: Volume) -> Result<()> {
        let mut state = self.record(DriveCall::WriteVolume(volume));
        state.volume = volume;
        Ok(())
    }

    fn eject(&self) -> Result<()> {
        let mut state = self.record(DriveCall::Eject);
        state.tray_open = true;
        state.audio_status = AudioStatus::NoStatus;
        state.track = 0;
        Ok(())
    }

    fn close_tray(&self) -> Result<()> {
        let mut state = self.record(DriveCall::CloseTray);
        state.tray_open = false;
        Ok(())
    }
}

/// Playback status types derived from the drive's Q subchannel
use serde::{Deserialize, Serialize};

use super::track::TrackNumber;

/// Audio status byte reported with every subchannel read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioStatus {
    /// Status not supported or not valid
    #[default]
    Invalid,

    /// Audio play operation in progress
    Playing,

    /// Audio play operation paused
    Paused,

    /// Audio play operation completed successfully
    Completed,

    /// Audio play operation stopped due to error
    Error,

    /// No current audio status to return
    NoStatus,
}

/// Minute/second/frame address (75 frames per second)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Msf {
    /// Minutes
    pub minute: u8,

    /// Seconds (0-59)
    pub second: u8,

    /// Frames (0-74)
    pub frame: u8,
}

impl Msf {
    /// Create an address
    pub fn new(minute: u8, second: u8, frame: u8) -> Self {
        Self {
            minute,
            second,
            frame,
        }
    }
}

impl std::fmt::Display for Msf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}.{:02}", self.minute, self.second, self.frame)
    }
}

/// One Q subchannel snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Subchannel {
    /// Audio status at the time of the read
    pub audio_status: AudioStatus,

    /// Track under the laser (meaningful while playing or paused)
    pub track: TrackNumber,

    /// Index within the track
    pub index: u8,

    /// Position from the start of the disc
    pub absolute: Msf,

    /// Position from the start of the track
    pub relative: Msf,
}

/// Playback status as seen by callers
///
/// Always derived from a fresh [`Subchannel`]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "track", rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Nothing playing (includes completed and errored plays)
    Stopped,

    /// Playing the given track
    Playing(TrackNumber),

    /// Paused on the given track
    Paused(TrackNumber),
}

impl PlaybackStatus {
    /// Derive the status from a subchannel read
    pub fn from_subchannel(subchannel: &Subchannel) -> Self {
        match subchannel.audio_status {
            AudioStatus::Playing => Self::Playing(subchannel.track),
            AudioStatus::Paused => Self::Paused(subchannel.track),
            _ => Self::Stopped,
        }
    }

    /// Track being played, or 0 unless playing
    pub fn current_track(&self) -> TrackNumber {
        match self {
            Self::Playing(track) => *track,
            Self::Stopped | Self::Paused(_) => 0,
        }
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused(_))
    }
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "Stopped"),
            Self::Playing(track) => write!(f, "Playing track {}", track),
            Self::Paused(track) => write!(f, "Paused on track {}", track),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subchannel(audio_status: AudioStatus, track: TrackNumber) -> Subchannel {
        Subchannel {
            audio_status,
            track,
            ..Default::default()
        }
    }

    #[test]
    fn status_from_subchannel() {
        assert_eq!(
            PlaybackStatus::from_subchannel(&subchannel(AudioStatus::Playing, 4)),
            PlaybackStatus::Playing(4)
        );
        assert_eq!(
            PlaybackStatus::from_subchannel(&subchannel(AudioStatus::Paused, 2)),
            PlaybackStatus::Paused(2)
        );

        for other in [
            AudioStatus::Invalid,
            AudioStatus::Completed,
            AudioStatus::Error,
            AudioStatus::NoStatus,
        ] {
            assert_eq!(
                PlaybackStatus::from_subchannel(&subchannel(other, 7)),
                PlaybackStatus::Stopped
            );
        }
    }

    #[test]
    fn current_track_only_while_playing() {
        assert_eq!(PlaybackStatus::Playing(5).current_track(), 5);
        assert_eq!(PlaybackStatus::Paused(5).current_track(), 0);
        assert_eq!(PlaybackStatus::Stopped.current_track(), 0);
    }

    #[test]
    fn msf_display() {
        assert_eq!(Msf::new(3, 25, 40).to_string(), "03:25.40");
        assert_eq!(Msf::new(0, 5, 7).to_string(), "00:05.07");
    }

    #[test]
    fn status_display() {
        assert_eq!(PlaybackStatus::Stopped.to_string(), "Stopped");
        assert_eq!(PlaybackStatus::Playing(3).to_string(), "Playing track 3");
        assert_eq!(PlaybackStatus::Paused(3).to_string(), "Paused on track 3");
    }
}

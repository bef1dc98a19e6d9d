//! Core error types for Spindle
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

use crate::types::TrackNumber;

/// Result type alias using `CdError`
pub type Result<T> = std::result::Result<T, CdError>;

/// Core error type for Spindle
///
/// Every drive operation reports failure through this type; there is no
/// shared "last error" state to consult afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CdError {
    /// An operation needed the drive before the session was initialized
    #[error("Device not initialized")]
    NotInitialized,

    /// Opening the device failed
    #[error("Cannot open device {device}: {reason}")]
    Init {
        /// Device path that was being opened
        device: String,
        /// OS error text
        reason: String,
    },

    /// A control call was rejected by the drive or the OS
    #[error("{op}: {reason}")]
    Device {
        /// ioctl request name, e.g. `CDROMPLAYTRKIND`
        op: &'static str,
        /// OS error text
        reason: String,
    },

    /// `play_from` was asked for a track past the end of the disc
    #[error("Track {track} is out of range (last track is {last})")]
    OutOfRange {
        /// Requested track
        track: TrackNumber,
        /// Last track on the disc
        last: TrackNumber,
    },

    /// A track number that cannot exist on a CD (0, negative, > 99)
    #[error("Invalid track number: {0}")]
    InvalidTrack(i64),

    /// Navigation found no audio track anywhere on the disc
    #[error("No audio tracks on CD")]
    NoAudioTracks,

    /// The platform has no drive backend
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Device configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CdError {
    /// Create a device error for a failed control call
    pub fn device(op: &'static str, reason: impl Display) -> Self {
        Self::Device {
            op,
            reason: reason.to_string(),
        }
    }

    /// Create an initialization error for `device`
    pub fn init(device: &Path, reason: impl Display) -> Self {
        Self::Init {
            device: device.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors raised by the drive itself rather than by argument checks
    pub fn is_device_error(&self) -> bool {
        matches!(self, Self::Device { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_error_message_names_operation() {
        let err = CdError::device("CDROMPLAYTRKIND", "Input/output error");
        assert_eq!(err.to_string(), "CDROMPLAYTRKIND: Input/output error");
        assert!(err.is_device_error());
    }

    #[test]
    fn init_error_carries_path() {
        let err = CdError::init(Path::new("/dev/sr9"), "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Cannot open device /dev/sr9: No such file or directory"
        );
        assert!(!err.is_device_error());
    }

    #[test]
    fn out_of_range_message() {
        let err = CdError::OutOfRange { track: 14, last: 12 };
        assert_eq!(
            err.to_string(),
            "Track 14 is out of range (last track is 12)"
        );
    }
}

//! Core traits for Spindle
use crate::error::Result;
use crate::types::{Subchannel, TocHeader, TrackNumber, TrackType, Volume};
use std::path::Path;

/// Raw control interface of a CD-ROM drive
///
/// One method per drive control call. Implementations do no caching and no
/// validation beyond what the call itself needs: every query goes to the
/// drive, and rejections come back as `CdError::Device`.
///
/// Methods take `&self` because the drive, not the handle, holds the state.
pub trait CdDrive {
    /// Read the first and last track numbers from the TOC header
    fn read_toc_header(&self) -> Result<TocHeader>;

    /// Read the TOC entry for `track` and classify it
    ///
    /// # Errors
    /// Fails if the track does not exist or the drive rejects the query
    fn read_toc_entry(&self, track: TrackNumber) -> Result<TrackType>;

    /// Play tracks `start..=end`
    ///
    /// Only track numbers are sent; both index fields of the request are
    /// left at 0.
    fn play_tracks(&self, start: TrackNumber, end: TrackNumber) -> Result<()>;

    /// Pause audio playback
    fn pause(&self) -> Result<()>;

    /// Resume paused audio playback
    fn resume(&self) -> Result<()>;

    /// Stop audio playback
    fn stop(&self) -> Result<()>;

    /// Read the current Q subchannel (audio status and position)
    fn read_subchannel(&self) -> Result<Subchannel>;

    /// Read the output volume of the first two channels
    fn read_volume(&self) -> Result<Volume>;

    /// Set the output volume of the first two channels
    ///
    /// Channels beyond the first two are silenced.
    fn write_volume(&self, volume: Volume) -> Result<()>;

    /// Open the tray
    fn eject(&self) -> Result<()>;

    /// Close the tray
    fn close_tray(&self) -> Result<()>;
}

/// Opens drives by device path
///
/// Lets a session be backed by real hardware or by an in-memory drive.
pub trait DriveOpener {
    /// Open the drive at `device`
    ///
    /// # Errors
    /// Returns `CdError::Init` if the device cannot be opened
    fn open(&self, device: &Path) -> Result<Box<dyn CdDrive>>;
}

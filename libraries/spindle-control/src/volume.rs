//! Volume control
//!
//! Per-channel drive volume, 0-255. Writes clamp out-of-range levels
//! instead of rejecting them.

use crate::session::DeviceSession;
use spindle_core::{Result, Volume};

/// Reads and writes the drive's output volume
#[derive(Debug, Clone, Copy)]
pub struct VolumeController<'a> {
    session: &'a DeviceSession,
}

impl<'a> VolumeController<'a> {
    /// Create a volume controller on `session`
    pub fn new(session: &'a DeviceSession) -> Self {
        Self { session }
    }

    /// Current left/right levels, read from the drive
    pub fn volume(&self) -> Result<Volume> {
        self.session.drive()?.read_volume()
    }

    /// Set left/right levels, clamping each into 0-255
    ///
    /// Returns the levels actually written.
    pub fn set_volume(&self, left: i64, right: i64) -> Result<Volume> {
        let volume = Volume::clamped(left, right);
        if i64::from(volume.left) != left || i64::from(volume.right) != right {
            tracing::debug!(
                "Clamped volume ({}, {}) to ({}, {})",
                left,
                right,
                volume.left,
                volume.right
            );
        }

        self.session.drive()?.write_volume(volume)?;
        Ok(volume)
    }
}

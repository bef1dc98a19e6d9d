//! CD-ROM drive backends for Spindle
//!
//! This crate provides the [`CdDrive`](spindle_core::CdDrive) implementations:
//!
//! - [`LinuxDrive`] - raw `linux/cdrom.h` ioctls on a block device
//!   (Linux only)
//! - [`MemoryDrive`] - an in-memory drive with a scripted disc, used by the
//!   test suites and by `spindle --simulate`
//!
//! [`SystemOpener`] is the opener for the platform's real hardware. On
//! platforms without a backend it fails every open with
//! `CdError::Unsupported`.
//!
//! # Example
//!
//! ```
//! use spindle_core::{CdDrive, DriveOpener, TrackType};
//! use spindle_drive::MemoryDrive;
//! use std::path::Path;
//!
//! # fn main() -> spindle_core::Result<()> {
//! let drive = MemoryDrive::from_layout("DAAA")?;
//! let handle = drive.open(Path::new("/dev/cdrom"))?;
//!
//! assert_eq!(handle.read_toc_entry(1)?, TrackType::Data);
//! handle.play_tracks(2, 4)?;
//! assert_eq!(drive.open_handles(), 1);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(target_os = "linux")]
mod ffi;
#[cfg(target_os = "linux")]
mod linux;
pub mod memory;

#[cfg(target_os = "linux")]
pub use linux::{LinuxDrive, LinuxOpener};
pub use memory::{DriveCall, MemoryDrive};

/// Opener for the platform's CD-ROM hardware
#[cfg(target_os = "linux")]
pub type SystemOpener = LinuxOpener;

/// Opener for the platform's CD-ROM hardware
#[cfg(not(target_os = "linux"))]
pub type SystemOpener = UnsupportedOpener;

/// Opener for the platform's CD-ROM hardware
#[cfg(target_os = "linux")]
pub fn system_opener() -> SystemOpener {
    LinuxOpener
}

/// Opener for the platform's CD-ROM hardware
#[cfg(not(target_os = "linux"))]
pub fn system_opener() -> SystemOpener {
    UnsupportedOpener
}

/// Opener used where no drive backend exists
#[cfg(not(target_os = "linux"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedOpener;

#[cfg(not(target_os = "linux"))]
impl spindle_core::DriveOpener for UnsupportedOpener {
    fn open(
        &self,
        _device: &std::path::Path,
    ) -> spindle_core::Result<Box<dyn spindle_core::CdDrive>> {
        Err(spindle_core::CdError::Unsupported(format!(
            "no CD-ROM backend for {}",
            std::env::consts::OS
        )))
    }
}

//! Spindle - CD Audio Control
//!
//! Hardware-independent control layer for audio CD playback.
//!
//! This crate provides:
//! - Device session lifecycle (open/close the drive, one handle at a time)
//! - Table of contents access (track range, audio/data classification)
//! - Playback control (play, play range, play to end of disc, pause/resume, stop)
//! - Live playback status, polled from the drive on every request
//! - Volume control (per-channel, clamped to 0-255)
//! - Track navigation (next, previous and random audio track)
//!
//! # Architecture
//!
//! `spindle-control` never talks to the OS directly. A [`DeviceSession`]
//! owns a boxed [`CdDrive`](spindle_core::CdDrive) obtained from a
//! [`DriveOpener`](spindle_core::DriveOpener); the controllers borrow the
//! session, so the drive cannot be closed or reopened while one is in use.
//!
//! Nothing is cached: every status query goes to the drive, so changes made
//! with the buttons on the drive itself are always seen.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use spindle_control::{DeviceConfig, DeviceSession, PlaybackController, TrackNavigator};
//! use spindle_core::PlaybackStatus;
//! use spindle_drive::MemoryDrive;
//!
//! # fn main() -> spindle_core::Result<()> {
//! // Data track first, then three audio tracks
//! let drive = MemoryDrive::from_layout("DAAA")?;
//! let session = DeviceSession::open(drive, DeviceConfig::default())?;
//!
//! // Skip to the first audio track; plays through to the end of the disc
//! let navigator = TrackNavigator::new(&session);
//! assert_eq!(navigator.forward_track()?, 2);
//!
//! let playback = PlaybackController::new(&session);
//! playback.pause()?;
//! assert_eq!(playback.status()?, PlaybackStatus::Paused(2));
//! playback.resume()?;
//! assert_eq!(playback.current_track()?, 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Volume
//!
//! ```rust
//! use spindle_control::{DeviceConfig, DeviceSession, VolumeController};
//! use spindle_core::Volume;
//! use spindle_drive::MemoryDrive;
//!
//! # fn main() -> spindle_core::Result<()> {
//! let session = DeviceSession::open(MemoryDrive::audio_disc(1), DeviceConfig::default())?;
//! let volume = VolumeController::new(&session);
//!
//! // Out-of-range levels are clamped, not rejected
//! volume.set_volume(-5, 300)?;
//! assert_eq!(volume.volume()?, Volume::new(0, 255));
//! # Ok(())
//! # }
//! ```

mod config;
mod navigator;
mod playback;
mod session;
mod toc;
mod volume;

// Public exports
pub use config::{DeviceConfig, DEFAULT_DEVICE, DEVICE_ENV};
pub use navigator::TrackNavigator;
pub use playback::PlaybackController;
pub use session::DeviceSession;
pub use toc::TableOfContents;
pub use volume::VolumeController;

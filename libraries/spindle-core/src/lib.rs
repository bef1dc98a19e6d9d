//! Spindle Core
//!
//! Platform-agnostic types, traits, and error handling for Spindle.
//!
//! This crate provides the building blocks shared by the drive backends
//! (`spindle-drive`), the control layer (`spindle-control`) and the command
//! line front end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackRange`, `TrackType`, `PlaybackStatus`, `Volume`, etc.
//! - **Core Traits**: `CdDrive` (raw drive control) and `DriveOpener`
//! - **Error Handling**: Unified `CdError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use spindle_core::{PlaybackStatus, TrackRange, Volume};
//!
//! let range = TrackRange::new(1, 12).unwrap();
//! assert_eq!(range.count(), 12);
//! assert_eq!(range.next_wrapping(12), 1);
//!
//! // Volume writes clamp instead of failing
//! assert_eq!(Volume::clamped(-5, 300), Volume::new(0, 255));
//!
//! assert_eq!(PlaybackStatus::Paused(3).current_track(), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CdError, Result};
pub use traits::{CdDrive, DriveOpener};

pub use types::{
    // Track layout
    TocEntry, TocHeader, TrackNumber, TrackRange, TrackType,
    // Playback status
    AudioStatus, Msf, PlaybackStatus, Subchannel,
    // Volume
    Volume,
};

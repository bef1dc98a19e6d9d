//! Domain types

mod status;
mod track;
mod volume;

pub use status::{AudioStatus, Msf, PlaybackStatus, Subchannel};
pub use track::{TocEntry, TocHeader, TrackNumber, TrackRange, TrackType};
pub use volume::Volume;

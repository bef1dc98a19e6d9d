//! Shared helpers for spindle-control integration tests

#![allow(dead_code)]

use spindle_control::{DeviceConfig, DeviceSession};
use spindle_core::{TrackNumber, TrackType};
use spindle_drive::MemoryDrive;

/// Open a session on a memory drive holding `layout` (`A`udio / `D`ata)
pub fn open_layout(layout: &str) -> (MemoryDrive, DeviceSession) {
    let drive = MemoryDrive::from_layout(layout).expect("valid layout");
    let session = DeviceSession::open(drive.clone(), DeviceConfig::default()).expect("open");
    (drive, session)
}

/// Open a session on a disc starting at `first` with the given track types
pub fn open_disc(first: TrackNumber, tracks: Vec<TrackType>) -> (MemoryDrive, DeviceSession) {
    let drive = MemoryDrive::new(first, tracks);
    let session = DeviceSession::open(drive.clone(), DeviceConfig::default()).expect("open");
    (drive, session)
}

/// Layout string for a list of track types
pub fn layout_of(tracks: &[TrackType]) -> String {
    tracks
        .iter()
        .map(|t| if t.is_audio() { 'A' } else { 'D' })
        .collect()
}

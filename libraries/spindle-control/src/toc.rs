//! Table of contents queries
//!
//! Track range and per-track classification, read from the drive on every
//! call.

use crate::session::DeviceSession;
use spindle_core::{CdError, Result, TocEntry, TrackNumber, TrackRange, TrackType};

/// Reads the disc layout through a session
#[derive(Debug, Clone, Copy)]
pub struct TableOfContents<'a> {
    session: &'a DeviceSession,
}

impl<'a> TableOfContents<'a> {
    /// Create a TOC reader on `session`
    pub fn new(session: &'a DeviceSession) -> Self {
        Self { session }
    }

    /// First and last track numbers
    ///
    /// # Errors
    /// `CdError::Device` if the drive cannot read the TOC (no disc, tray
    /// open, ...) or reports a header that is not a valid range. A failure is
    /// never reported as an empty range.
    pub fn track_range(&self) -> Result<TrackRange> {
        let header = self.session.drive()?.read_toc_header()?;

        TrackRange::from_header(header).ok_or_else(|| {
            CdError::device(
                "CDROMREADTOCHDR",
                format!(
                    "invalid track range {}-{}",
                    header.first_track, header.last_track
                ),
            )
        })
    }

    /// Classify `track` as audio or data
    ///
    /// # Errors
    /// Fails for track 0 or when the drive cannot read the entry.
    pub fn track_type(&self, track: TrackNumber) -> Result<TrackType> {
        if track == 0 {
            return Err(CdError::InvalidTrack(0));
        }
        self.session.drive()?.read_toc_entry(track)
    }

    /// Check whether `track` is playable audio
    ///
    /// A track whose entry cannot be read counts as not audio.
    pub fn is_audio(&self, track: TrackNumber) -> bool {
        match self.track_type(track) {
            Ok(track_type) => track_type.is_audio(),
            Err(e) => {
                tracing::warn!("Cannot classify track {}: {}", track, e);
                false
            }
        }
    }

    /// Number of tracks on the disc
    pub fn track_count(&self) -> Result<usize> {
        Ok(self.track_range()?.count())
    }

    /// Every track with its classification (`None` where unreadable)
    pub fn entries(&self) -> Result<Vec<TocEntry>> {
        let range = self.track_range()?;

        Ok(range
            .tracks()
            .map(|track| TocEntry {
                track,
                track_type: self.track_type(track).ok(),
            })
            .collect())
    }

    /// Check whether any track in `range` is audio
    pub(crate) fn any_audio(&self, range: TrackRange) -> bool {
        range.tracks().any(|track| self.is_audio(track))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceConfig;
    use spindle_drive::MemoryDrive;

    fn session(drive: &MemoryDrive) -> DeviceSession {
        DeviceSession::open(drive.clone(), DeviceConfig::default()).unwrap()
    }

    #[test]
    fn reads_range_and_types() {
        let drive = MemoryDrive::from_layout("DAAD").unwrap();
        let session = session(&drive);
        let toc = TableOfContents::new(&session);

        let range = toc.track_range().unwrap();
        assert_eq!((range.first(), range.last()), (1, 4));
        assert_eq!(toc.track_count().unwrap(), 4);
        assert_eq!(toc.track_type(1).unwrap(), TrackType::Data);
        assert_eq!(toc.track_type(2).unwrap(), TrackType::Audio);
        assert!(toc.is_audio(3));
        assert!(!toc.is_audio(4));
    }

    #[test]
    fn invalid_tracks_are_errors_not_types() {
        let drive = MemoryDrive::audio_disc(2);
        let session = session(&drive);
        let toc = TableOfContents::new(&session);

        assert_eq!(toc.track_type(0), Err(CdError::InvalidTrack(0)));
        assert!(toc.track_type(3).is_err());
        assert!(!toc.is_audio(3));
    }

    #[test]
    fn failure_is_not_an_empty_disc() {
        let drive = MemoryDrive::empty();
        let session = session(&drive);
        let toc = TableOfContents::new(&session);

        let err = toc.track_range().unwrap_err();
        assert!(err.is_device_error());
        assert!(toc.track_count().is_err());
        assert!(toc.entries().is_err());
    }

    #[test]
    fn entries_mark_unreadable_tracks() {
        let drive = MemoryDrive::from_layout("ADA").unwrap();
        drive.make_unreadable(2);
        let session = session(&drive);
        let toc = TableOfContents::new(&session);

        let entries = toc.entries().unwrap();
        assert_eq!(
            entries,
            vec![
                TocEntry {
                    track: 1,
                    track_type: Some(TrackType::Audio)
                },
                TocEntry {
                    track: 2,
                    track_type: None
                },
                TocEntry {
                    track: 3,
                    track_type: Some(TrackType::Audio)
                },
            ]
        );
    }

    #[test]
    fn any_audio() {
        let data_only = MemoryDrive::from_layout("DDD").unwrap();
        let session_a = session(&data_only);
        let toc_a = TableOfContents::new(&session_a);
        assert!(!toc_a.any_audio(toc_a.track_range().unwrap()));

        let mixed = MemoryDrive::from_layout("DDA").unwrap();
        let session_b = session(&mixed);
        let toc_b = TableOfContents::new(&session_b);
        assert!(toc_b.any_audio(toc_b.track_range().unwrap()));
    }

    #[test]
    fn requires_open_session() {
        let session = DeviceSession::new(MemoryDrive::audio_disc(1), DeviceConfig::default());
        let toc = TableOfContents::new(&session);
        assert_eq!(toc.track_range(), Err(CdError::NotInitialized));
        assert_eq!(toc.track_type(1), Err(CdError::NotInitialized));
    }
}

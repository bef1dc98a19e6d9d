/// Track layout types read from the disc's table of contents
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Track number as stored in the TOC (1-99)
///
/// `0` is reserved to mean "no track" and never names a real track.
pub type TrackNumber = u8;

/// Raw TOC header as returned by the drive
///
/// Not validated; see [`TrackRange::from_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocHeader {
    /// First track number
    pub first_track: TrackNumber,

    /// Last track number
    pub last_track: TrackNumber,
}

/// Inclusive range of track numbers on a disc
///
/// Invariant: `1 <= first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackRange {
    first: TrackNumber,
    last: TrackNumber,
}

impl TrackRange {
    /// Placeholder `(0, 0)` for displays that have no disc information.
    ///
    /// Never produced by a successful TOC read.
    pub const UNKNOWN: Self = Self { first: 0, last: 0 };

    /// Create a range, or `None` if `first` is 0 or greater than `last`
    pub fn new(first: TrackNumber, last: TrackNumber) -> Option<Self> {
        if first == 0 || first > last {
            None
        } else {
            Some(Self { first, last })
        }
    }

    /// Validate a raw TOC header
    pub fn from_header(header: TocHeader) -> Option<Self> {
        Self::new(header.first_track, header.last_track)
    }

    /// First track on the disc
    pub fn first(&self) -> TrackNumber {
        self.first
    }

    /// Last track on the disc
    pub fn last(&self) -> TrackNumber {
        self.last
    }

    /// Number of tracks (`last - first + 1`)
    pub fn count(&self) -> usize {
        if *self == Self::UNKNOWN {
            return 0;
        }
        (self.last - self.first) as usize + 1
    }

    /// Iterate over all track numbers in order
    pub fn tracks(&self) -> RangeInclusive<TrackNumber> {
        self.first..=self.last
    }

    /// Track after `track`, wrapping from `last` back to `first`
    pub fn next_wrapping(&self, track: TrackNumber) -> TrackNumber {
        if track >= self.last || track < self.first {
            self.first
        } else {
            track + 1
        }
    }

    /// Track before `track`, wrapping from `first` back to `last`
    pub fn prev_wrapping(&self, track: TrackNumber) -> TrackNumber {
        if track <= self.first || track > self.last {
            self.last
        } else {
            track - 1
        }
    }
}

impl Default for TrackRange {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl std::fmt::Display for TrackRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Track classification from the TOC control nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    /// CD-DA audio the drive can play
    Audio,

    /// Data track (files); not playable
    Data,
}

impl TrackType {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::Data => "Data",
        }
    }

    /// Check if this is an audio track
    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Audio)
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of a TOC listing
///
/// `track_type` is `None` when the entry could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Track number
    pub track: TrackNumber,

    /// Classification, if the drive answered
    pub track_type: Option<TrackType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_ranges() {
        assert!(TrackRange::new(0, 5).is_none());
        assert!(TrackRange::new(6, 5).is_none());
        assert!(TrackRange::new(0, 0).is_none());
        assert!(TrackRange::new(1, 1).is_some());
    }

    #[test]
    fn header_validation() {
        let header = TocHeader {
            first_track: 1,
            last_track: 9,
        };
        let range = TrackRange::from_header(header).unwrap();
        assert_eq!(range.first(), 1);
        assert_eq!(range.last(), 9);
        assert_eq!(range.count(), 9);

        let bogus = TocHeader {
            first_track: 0,
            last_track: 0,
        };
        assert!(TrackRange::from_header(bogus).is_none());
    }

    #[test]
    fn wrapping_navigation() {
        let range = TrackRange::new(3, 7).unwrap();
        assert_eq!(range.next_wrapping(3), 4);
        assert_eq!(range.next_wrapping(7), 3);
        assert_eq!(range.prev_wrapping(4), 3);
        assert_eq!(range.prev_wrapping(3), 7);

        // Outside the range snaps back in
        assert_eq!(range.next_wrapping(0), 3);
        assert_eq!(range.prev_wrapping(99), 7);
    }

    #[test]
    fn single_track_wraps_onto_itself() {
        let range = TrackRange::new(1, 1).unwrap();
        assert_eq!(range.next_wrapping(1), 1);
        assert_eq!(range.prev_wrapping(1), 1);
    }

    #[test]
    fn unknown_range_is_empty() {
        assert_eq!(TrackRange::UNKNOWN.count(), 0);
        assert_eq!(TrackRange::default(), TrackRange::UNKNOWN);
    }

    #[test]
    fn track_type_display() {
        assert_eq!(TrackType::Audio.to_string(), "Audio");
        assert_eq!(TrackType::Data.to_string(), "Data");
        assert!(TrackType::Audio.is_audio());
        assert!(!TrackType::Data.is_audio());
    }

    #[test]
    fn toc_entry_serializes_lowercase_type() {
        let entry = TocEntry {
            track: 2,
            track_type: Some(TrackType::Data),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"track":2,"track_type":"data"}"#);
    }
}

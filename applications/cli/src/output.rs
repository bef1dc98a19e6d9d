//! Output formatting for query commands
//!
//! Text output keeps the classic player's layout; `--json` prints one JSON
//! document per query instead.

use serde::Serialize;
use spindle_core::{PlaybackStatus, Subchannel, TocEntry, TrackNumber, TrackType, Volume};
use std::io::{self, Write};

/// How query results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct TocReport<'a> {
    tracks: usize,
    entries: &'a [TocEntry],
}

#[derive(Serialize)]
struct InfoReport {
    playing: bool,
    track: TrackNumber,
    tracks: usize,
}

#[derive(Serialize)]
struct StatusReport {
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    track: Option<TrackNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<PositionReport>,
}

#[derive(Serialize)]
struct PositionReport {
    index: u8,
    relative: String,
    absolute: String,
}

impl StatusReport {
    fn new(subchannel: &Subchannel) -> Self {
        let position = PositionReport {
            index: subchannel.index,
            relative: subchannel.relative.to_string(),
            absolute: subchannel.absolute.to_string(),
        };

        match PlaybackStatus::from_subchannel(subchannel) {
            PlaybackStatus::Stopped => Self {
                state: "stopped",
                track: None,
                position: None,
            },
            PlaybackStatus::Playing(track) => Self {
                state: "playing",
                track: Some(track),
                position: Some(position),
            },
            PlaybackStatus::Paused(track) => Self {
                state: "paused",
                track: Some(track),
                position: Some(position),
            },
        }
    }
}

#[derive(Serialize)]
struct AudioReport {
    track: i64,
    audio: bool,
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Track listing
///
/// Unreadable entries are listed as data, as navigation treats them.
pub fn write_toc(
    out: &mut impl Write,
    format: OutputFormat,
    entries: &[TocEntry],
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(
            out,
            &TocReport {
                tracks: entries.len(),
                entries,
            },
        );
    }

    writeln!(out, "Track  Type  ({} tracks)", entries.len())?;
    for entry in entries {
        let track_type = entry.track_type.unwrap_or(TrackType::Data);
        writeln!(out, "  {:2}   {}", entry.track, track_type.as_str())?;
    }
    Ok(())
}

/// Current track (0 when not playing) and track count
pub fn write_info(
    out: &mut impl Write,
    format: OutputFormat,
    track: TrackNumber,
    tracks: usize,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &InfoReport {
                playing: track > 0,
                track,
                tracks,
            },
        ),
        OutputFormat::Text if track > 0 => {
            writeln!(out, "Playing track {} ({} tracks)", track, tracks)
        }
        OutputFormat::Text => writeln!(out, "Not playing ({} tracks)", tracks),
    }
}

/// Playback state, with the position inside the track while active
///
/// Text shows the track-relative time; JSON carries the index and both
/// relative and absolute times as `mm:ss.ff`.
pub fn write_status(
    out: &mut impl Write,
    format: OutputFormat,
    subchannel: &Subchannel,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &StatusReport::new(subchannel));
    }

    match PlaybackStatus::from_subchannel(subchannel) {
        PlaybackStatus::Stopped => writeln!(out, "Stopped"),
        status => writeln!(out, "{} ({})", status, subchannel.relative),
    }
}

/// Left and right volume
pub fn write_volume(out: &mut impl Write, format: OutputFormat, volume: Volume) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &volume),
        OutputFormat::Text => {
            writeln!(out, "Left  Volume: {}", volume.left)?;
            writeln!(out, "Right Volume: {}", volume.right)
        }
    }
}

/// Whether a track is audio
pub fn write_audio(
    out: &mut impl Write,
    format: OutputFormat,
    track: i64,
    audio: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &AudioReport { track, audio }),
        OutputFormat::Text if audio => writeln!(out, "Track {} is audio", track),
        OutputFormat::Text => writeln!(out, "Track {} is not audio", track),
    }
}

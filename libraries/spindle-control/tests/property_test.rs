//! Property-based tests for navigation and volume
//!
//! Navigation results are compared against a straightforward model of the
//! disc built from the same layout.

mod common;

use common::{layout_of, open_layout};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spindle_control::{TrackNavigator, VolumeController};
use spindle_core::{CdError, PlaybackStatus, TrackType, Volume};

// ===== Helpers =====

fn arbitrary_disc() -> impl Strategy<Value = Vec<TrackType>> {
    prop::collection::vec(
        prop_oneof![Just(TrackType::Audio), Just(TrackType::Data)],
        1..=20,
    )
}

fn is_audio(tracks: &[TrackType], track: u8) -> bool {
    tracks[usize::from(track) - 1].is_audio()
}

/// First audio track at or after `from`, wrapping
fn model_forward(tracks: &[TrackType], from: u8) -> Option<u8> {
    let n = tracks.len() as u8;
    (0..n)
        .map(|step| (from - 1 + step) % n + 1)
        .find(|&t| is_audio(tracks, t))
}

/// First audio track strictly before `from`, wrapping, `from` itself last
fn model_back(tracks: &[TrackType], from: u8) -> Option<u8> {
    let n = tracks.len() as u8;
    (1..=n)
        .map(|step| (from - 1 + n - step % n) % n + 1)
        .find(|&t| is_audio(tracks, t))
}

// ===== Property Tests =====

proptest! {
    /// Property: forward lands on the next audio track, or fails iff none exists
    #[test]
    fn forward_matches_model(tracks in arbitrary_disc(), playing in proptest::option::of(1u8..=20)) {
        let layout = layout_of(&tracks);
        let (drive, session) = open_layout(&layout);
        let n = tracks.len() as u8;
        let playing = playing.filter(|&t| t <= n);
        if let Some(track) = playing {
            drive.set_status(PlaybackStatus::Playing(track));
        }

        let start = match playing {
            None => 1,
            Some(t) if t == n => 1,
            Some(t) => t + 1,
        };

        let result = TrackNavigator::new(&session).forward_track();
        match model_forward(&tracks, start) {
            Some(expected) => {
                prop_assert_eq!(result, Ok(expected));
                prop_assert_eq!(drive.plays(), vec![(expected, n)]);
            }
            None => {
                prop_assert_eq!(result, Err(CdError::NoAudioTracks));
                prop_assert!(drive.plays().is_empty());
            }
        }
    }

    /// Property: back lands on the previous audio track, or fails iff none exists
    #[test]
    fn back_matches_model(tracks in arbitrary_disc(), playing in proptest::option::of(1u8..=20)) {
        let layout = layout_of(&tracks);
        let (drive, session) = open_layout(&layout);
        let n = tracks.len() as u8;
        let playing = playing.filter(|&t| t <= n);
        if let Some(track) = playing {
            drive.set_status(PlaybackStatus::Playing(track));
        }

        let result = TrackNavigator::new(&session).back_track();
        match model_back(&tracks, playing.unwrap_or(1)) {
            Some(expected) => prop_assert_eq!(result, Ok(expected)),
            None => prop_assert_eq!(result, Err(CdError::NoAudioTracks)),
        }
    }

    /// Property: random always picks an audio track in range
    #[test]
    fn random_picks_audio(tracks in arbitrary_disc(), seed in any::<u64>()) {
        let layout = layout_of(&tracks);
        let (drive, session) = open_layout(&layout);
        let mut rng = StdRng::seed_from_u64(seed);

        let result = TrackNavigator::new(&session).random_track_with(&mut rng);
        if tracks.iter().any(TrackType::is_audio) {
            let track = result.unwrap();
            prop_assert!(is_audio(&tracks, track));
            prop_assert_eq!(drive.plays(), vec![(track, tracks.len() as u8)]);
        } else {
            prop_assert_eq!(result, Err(CdError::NoAudioTracks));
        }
    }

    /// Property: written volume is the clamped request
    #[test]
    fn volume_is_clamped(left in -1000i64..1000, right in -1000i64..1000) {
        let (_drive, session) = open_layout("A");
        let volume = VolumeController::new(&session);

        let written = volume.set_volume(left, right).unwrap();
        let expected = Volume::new(left.clamp(0, 255) as u8, right.clamp(0, 255) as u8);

        prop_assert_eq!(written, expected);
        prop_assert_eq!(volume.volume().unwrap(), expected);
    }
}

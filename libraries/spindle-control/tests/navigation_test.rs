//! Track navigation scenarios against an in-memory drive
//!
//! Each test drives the navigator through the public API only and checks
//! both the returned track and the play command the drive received.

mod common;

use common::{open_disc, open_layout};
use spindle_control::{PlaybackController, TrackNavigator};
use spindle_core::{CdError, PlaybackStatus, TrackType};

#[test]
fn forward_from_stopped_on_mixed_disc() {
    let (drive, session) = open_layout("DDADA");
    let navigator = TrackNavigator::new(&session);

    assert_eq!(navigator.forward_track().unwrap(), 3);
    assert_eq!(drive.plays(), vec![(3, 5)]);
    assert_eq!(drive.play_end(), Some(5));
}

#[test]
fn repeated_forward_cycles_through_audio_tracks() {
    let (_drive, session) = open_layout("ADAAD");
    let navigator = TrackNavigator::new(&session);

    let visited: Vec<u8> = (0..5).map(|_| navigator.forward_track().unwrap()).collect();
    assert_eq!(visited, vec![1, 3, 4, 1, 3]);
}

#[test]
fn repeated_back_cycles_in_reverse() {
    let (drive, session) = open_layout("ADAAD");
    drive.set_status(PlaybackStatus::Playing(1));
    let navigator = TrackNavigator::new(&session);

    let visited: Vec<u8> = (0..4).map(|_| navigator.back_track().unwrap()).collect();
    assert_eq!(visited, vec![4, 3, 1, 4]);
}

#[test]
fn back_from_track_three_wraps_to_five() {
    let (drive, session) = open_layout("DDADA");
    drive.set_status(PlaybackStatus::Playing(3));
    let navigator = TrackNavigator::new(&session);

    assert_eq!(navigator.back_track().unwrap(), 5);
    assert_eq!(drive.plays(), vec![(5, 5)]);
}

#[test]
fn all_data_disc_fails_every_navigation() {
    let (drive, session) = open_layout("DDDD");
    let navigator = TrackNavigator::new(&session);

    assert_eq!(navigator.forward_track(), Err(CdError::NoAudioTracks));
    assert_eq!(navigator.back_track(), Err(CdError::NoAudioTracks));
    assert_eq!(navigator.random_track(), Err(CdError::NoAudioTracks));
    assert!(drive.plays().is_empty());
}

#[test]
fn disc_not_starting_at_track_one() {
    let (drive, session) = open_disc(
        3,
        vec![TrackType::Data, TrackType::Audio, TrackType::Audio],
    );
    let navigator = TrackNavigator::new(&session);

    assert_eq!(navigator.forward_track().unwrap(), 4);
    assert_eq!(drive.plays(), vec![(4, 5)]);

    // Back from 4 skips data track 3 and wraps to 5
    assert_eq!(navigator.back_track().unwrap(), 5);
}

#[test]
fn navigation_follows_button_presses() {
    let (drive, session) = open_layout("AAAAAA");
    let navigator = TrackNavigator::new(&session);
    let playback = PlaybackController::new(&session);

    navigator.forward_track().unwrap();
    assert_eq!(playback.current_track().unwrap(), 1);

    // Someone skipped ahead on the drive itself
    drive.set_status(PlaybackStatus::Playing(4));
    assert_eq!(navigator.forward_track().unwrap(), 5);
}

#[test]
fn navigation_without_disc_is_a_device_error() {
    let (drive, session) = open_layout("AAA");
    session.eject().unwrap();
    let navigator = TrackNavigator::new(&session);

    let err = navigator.forward_track().unwrap_err();
    assert!(err.is_device_error());
    assert!(drive.plays().is_empty());

    session.close_tray().unwrap();
    assert_eq!(navigator.forward_track().unwrap(), 1);
}

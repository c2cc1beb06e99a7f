//! Unit tests for the player_store module.
//! No runtime, filesystem, or external dependencies.

#![allow(clippy::unwrap_used, clippy::panic)]

mod wire;

use std::time::Duration;

use tokio::sync::broadcast::error::TryRecvError;

use crate::config::{ContentType, PlayerOptions};
use crate::player_store::{
    PlaybackSpeed, PlaybackState, PlayerEvent, PlayerStore, Track, TrackField, Volume,
};

fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{id}.mp3"),
        title: format!("Track {id}"),
        artwork: format!("https://cdn.example.com/{id}.jpg"),
        album: None,
        artist: None,
    }
}

fn loaded(id: &str) -> TrackField {
    TrackField::Loaded(track(id))
}

fn playing_store(id: &str) -> PlayerStore {
    let store = PlayerStore::default();
    store.update_from_event(PlayerEvent::StateChanged {
        track: loaded(id),
        state: PlaybackState::Playing,
    });
    store
}

#[test]
fn initial_snapshot_has_fixed_defaults() {
    let store = PlayerStore::default();
    let state = store.state();

    assert_eq!(state.playback_state, PlaybackState::Idle);
    assert_eq!(state.position, Duration::ZERO);
    assert_eq!(state.duration, Duration::ZERO);
    assert_eq!(state.playback_speed, PlaybackSpeed::default());
    assert_eq!(state.volume, Volume::default());
    assert_eq!(state.track_playing, None);
    assert_eq!(state.error, None);
    assert_eq!(state.options, PlayerOptions::default());
}

#[test]
fn one_notification_per_accepted_event() {
    let store = playing_store("a");
    let mut changes = store.subscribe();

    store.update_from_event(PlayerEvent::Progress {
        track: loaded("a"),
        position: Some(Duration::from_millis(100)),
        duration: None,
    });
    store.update_from_event(PlayerEvent::StateChanged {
        track: TrackField::Absent,
        state: PlaybackState::Paused,
    });
    store.update_from_event(PlayerEvent::SeekComplete { track: loaded("a") });

    // The dropped state-changed event in the middle notifies nobody.
    assert!(changes.try_recv().is_ok());
    assert!(changes.try_recv().is_ok());
    assert!(matches!(changes.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn set_volume_replaces_snapshot() {
    let store = PlayerStore::default();
    let before = store.state();

    store.set_volume(Volume::new(0.3));

    let after = store.state();
    assert_eq!(*after.volume, 0.3);
    assert_eq!(*before.volume, 1.0);
}

#[test]
fn set_debug_overrides_flags() {
    let store = PlayerStore::default();

    store.set_debug(true, true);

    let state = store.state();
    assert!(state.debug);
    assert!(state.debug_includes_progress);
}

#[test]
fn configure_replaces_options_and_flags() {
    let store = PlayerStore::default();
    let options = PlayerOptions {
        content_type: ContentType::Speech,
        debug: true,
        debug_includes_progress: false,
        progress_interval_ms: 500,
    };

    store.configure(options.clone());

    let state = store.state();
    assert_eq!(state.options, options);
    assert!(state.debug);
    assert!(!state.debug_includes_progress);
}

#[test]
fn reset_restores_defaults_but_keeps_options() {
    let options = PlayerOptions {
        content_type: ContentType::Speech,
        debug: false,
        debug_includes_progress: false,
        progress_interval_ms: 250,
    };
    let store = PlayerStore::new(options.clone());
    store.update_from_event(PlayerEvent::StateChanged {
        track: loaded("a"),
        state: PlaybackState::Playing,
    });
    store.set_volume(Volume::new(0.5));

    store.reset();

    let state = store.state();
    assert_eq!(state.playback_state, PlaybackState::Idle);
    assert_eq!(state.track_playing, None);
    assert_eq!(*state.volume, 1.0);
    assert_eq!(state.options, options);
}

#[test]
fn volume_and_speed_are_clamped() {
    assert_eq!(*Volume::new(1.5), 1.0);
    assert_eq!(*Volume::new(-0.5), 0.0);
    assert_eq!(*PlaybackSpeed::new(10.0), PlaybackSpeed::MAX);
    assert_eq!(*PlaybackSpeed::new(0.0), PlaybackSpeed::MIN);
}

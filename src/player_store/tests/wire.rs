//! Wire-form tests: JSON payloads as the engine bridge delivers them.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use crate::player_store::{EventKind, PlaybackState, PlayerEvent, PlayerState, TrackField};

#[test]
fn state_changed_with_track_descriptor() {
    let event: PlayerEvent = serde_json::from_str(
        r#"{
            "type": "STATE_CHANGED",
            "state": "PLAYING",
            "track": {
                "id": "t1",
                "url": "https://cdn.example.com/t1.mp3",
                "title": "First",
                "artwork": "https://cdn.example.com/t1.jpg"
            }
        }"#,
    )
    .unwrap();

    match event {
        PlayerEvent::StateChanged { track, state } => {
            assert_eq!(state, PlaybackState::Playing);
            match track {
                TrackField::Loaded(track) => assert_eq!(track.id, "t1"),
                other => panic!("expected a loaded track, got {other:?}"),
            }
        }
        other => panic!("expected STATE_CHANGED, got {other:?}"),
    }
}

#[test]
fn explicit_null_track_deserializes_as_unloaded() {
    let event: PlayerEvent =
        serde_json::from_str(r#"{"type": "SEEK_COMPLETE", "track": null}"#).unwrap();

    assert_eq!(
        event,
        PlayerEvent::SeekComplete {
            track: TrackField::Unloaded,
        }
    );
}

#[test]
fn missing_track_key_deserializes_as_absent() {
    let event: PlayerEvent = serde_json::from_str(r#"{"type": "TRACK_ENDED"}"#).unwrap();

    assert_eq!(
        event,
        PlayerEvent::TrackEnded {
            track: TrackField::Absent,
        }
    );
}

#[test]
fn progress_fields_are_millisecond_integers_and_optional() {
    let event: PlayerEvent =
        serde_json::from_str(r#"{"type": "PROGRESS", "track": null, "position": 1500}"#).unwrap();

    assert_eq!(
        event,
        PlayerEvent::Progress {
            track: TrackField::Unloaded,
            position: Some(Duration::from_millis(1500)),
            duration: None,
        }
    );
}

#[test]
fn playback_error_carries_message_and_code() {
    let event: PlayerEvent = serde_json::from_str(
        r#"{"type": "PLAYBACK_ERROR", "error": {"message": "HTTP 404", "code": 404}}"#,
    )
    .unwrap();

    match event {
        PlayerEvent::PlaybackError { track, error } => {
            assert_eq!(track, TrackField::Absent);
            assert_eq!(error.message, "HTTP 404");
            assert_eq!(error.code, 404);
        }
        other => panic!("expected PLAYBACK_ERROR, got {other:?}"),
    }
}

#[test]
fn unrecognized_kind_maps_to_unknown() {
    let event: PlayerEvent =
        serde_json::from_str(r#"{"type": "GAPLESS_TRANSITION", "gap": 0}"#).unwrap();

    assert_eq!(event, PlayerEvent::Unknown);
}

#[test]
fn speed_is_clamped_on_the_way_in() {
    let event: PlayerEvent = serde_json::from_str(
        r#"{"type": "PLAYBACK_SPEED_CHANGED", "track": null, "speed": 64.0}"#,
    )
    .unwrap();

    match event {
        PlayerEvent::PlaybackSpeedChanged { speed, .. } => assert_eq!(*speed, 2.0),
        other => panic!("expected PLAYBACK_SPEED_CHANGED, got {other:?}"),
    }
}

#[test]
fn event_kinds_display_their_wire_names() {
    assert_eq!(EventKind::StateChanged.to_string(), "STATE_CHANGED");
    assert_eq!(EventKind::Progress.to_string(), "PROGRESS");
    assert_eq!(
        EventKind::PlaybackSpeedChanged.to_string(),
        "PLAYBACK_SPEED_CHANGED"
    );
    assert_eq!(EventKind::SeekComplete.to_string(), "SEEK_COMPLETE");
    assert_eq!(EventKind::TrackEnded.to_string(), "TRACK_ENDED");
    assert_eq!(EventKind::PlaybackError.to_string(), "PLAYBACK_ERROR");
    assert_eq!(EventKind::RemoteNext.to_string(), "REMOTE_NEXT");
    assert_eq!(EventKind::RemotePrev.to_string(), "REMOTE_PREV");
}

#[test]
fn snapshot_serializes_durations_as_milliseconds() {
    let state = PlayerState::default();

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["position"], 0);
    assert_eq!(json["duration"], 0);
    assert_eq!(json["playback_state"], "IDLE");
    assert_eq!(json["volume"], 1.0);
}

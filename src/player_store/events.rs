use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use super::types::{PlaybackError, PlaybackSpeed, PlaybackState, Track, duration_ms_opt};

/// Track payload attached to an engine event.
///
/// Three states cross the bridge: the key can be missing entirely (the
/// engine has nothing to say about the track), explicitly `null` (the
/// engine unloaded the track), or a descriptor. Collapsing the first two
/// into one `Option` would lose the unload signal, so the distinction is
/// kept as its own type.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrackField {
    /// Key missing from the payload; leave the stored track untouched
    #[default]
    Absent,

    /// Explicit `null`; the engine has unloaded the track
    Unloaded,

    /// A track descriptor
    Loaded(Track),
}

impl TrackField {
    /// Whether the payload carried no track information at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

// Absent is produced by #[serde(default)] when the key is missing, so
// deserialization only ever sees null or a descriptor.
impl<'de> Deserialize<'de> for TrackField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Track>::deserialize(deserializer)? {
            Some(track) => Self::Loaded(track),
            None => Self::Unloaded,
        })
    }
}

impl From<Option<Track>> for TrackField {
    fn from(track: Option<Track>) -> Self {
        match track {
            Some(track) => Self::Loaded(track),
            None => Self::Unloaded,
        }
    }
}

/// Playback notifications emitted by the audio engine.
///
/// Wire form is JSON tagged on `"type"`; unrecognized tags map to
/// [`PlayerEvent::Unknown`] so newer engines never break older hosts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerEvent {
    /// The engine entered a new playback state
    StateChanged {
        /// Track the state applies to
        #[serde(default)]
        track: TrackField,
        /// The new playback state
        state: PlaybackState,
    },

    /// Periodic position/duration report.
    ///
    /// Either field may be omitted; an omitted field leaves the prior
    /// snapshot value unchanged.
    Progress {
        /// Track the report applies to
        #[serde(default)]
        track: TrackField,
        /// Playback position in milliseconds
        #[serde(default, deserialize_with = "duration_ms_opt::deserialize")]
        position: Option<Duration>,
        /// Track duration in milliseconds
        #[serde(default, deserialize_with = "duration_ms_opt::deserialize")]
        duration: Option<Duration>,
    },

    /// The playback rate changed
    PlaybackSpeedChanged {
        /// Track the rate applies to
        #[serde(default)]
        track: TrackField,
        /// The new rate multiplier
        speed: PlaybackSpeed,
    },

    /// A seek finished
    SeekComplete {
        /// Track after the seek, `null` when the engine unloaded it
        #[serde(default)]
        track: TrackField,
    },

    /// The current track played to its end
    TrackEnded {
        /// Track that ended, `null` when the engine unloaded it
        #[serde(default)]
        track: TrackField,
    },

    /// The engine reported a playback fault
    PlaybackError {
        /// Track the fault occurred on, when known
        #[serde(default)]
        track: TrackField,
        /// The reported error
        error: PlaybackError,
    },

    /// Remote-control request to skip forward
    RemoteNext {
        /// Informational only, never merged
        #[serde(default)]
        track: TrackField,
    },

    /// Remote-control request to skip backward
    RemotePrev {
        /// Informational only, never merged
        #[serde(default)]
        track: TrackField,
    },

    /// Remote-control request to start playback
    RemotePlay {
        /// Informational only, never merged
        #[serde(default)]
        track: TrackField,
    },

    /// Remote-control request to pause playback
    RemotePause {
        /// Informational only, never merged
        #[serde(default)]
        track: TrackField,
    },

    /// Event kind this version does not know about
    #[serde(other)]
    Unknown,
}

impl PlayerEvent {
    /// The kind discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::StateChanged { .. } => EventKind::StateChanged,
            Self::Progress { .. } => EventKind::Progress,
            Self::PlaybackSpeedChanged { .. } => EventKind::PlaybackSpeedChanged,
            Self::SeekComplete { .. } => EventKind::SeekComplete,
            Self::TrackEnded { .. } => EventKind::TrackEnded,
            Self::PlaybackError { .. } => EventKind::PlaybackError,
            Self::RemoteNext { .. } => EventKind::RemoteNext,
            Self::RemotePrev { .. } => EventKind::RemotePrev,
            Self::RemotePlay { .. } => EventKind::RemotePlay,
            Self::RemotePause { .. } => EventKind::RemotePause,
            Self::Unknown => EventKind::Unknown,
        }
    }

    /// The track payload carried by this event.
    pub fn track(&self) -> &TrackField {
        static NO_TRACK: TrackField = TrackField::Absent;

        match self {
            Self::StateChanged { track, .. }
            | Self::Progress { track, .. }
            | Self::PlaybackSpeedChanged { track, .. }
            | Self::SeekComplete { track }
            | Self::TrackEnded { track }
            | Self::PlaybackError { track, .. }
            | Self::RemoteNext { track }
            | Self::RemotePrev { track }
            | Self::RemotePlay { track }
            | Self::RemotePause { track } => track,
            Self::Unknown => &NO_TRACK,
        }
    }
}

/// Event kind discriminant, used for diagnostics and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `STATE_CHANGED`
    StateChanged,
    /// `PROGRESS`
    Progress,
    /// `PLAYBACK_SPEED_CHANGED`
    PlaybackSpeedChanged,
    /// `SEEK_COMPLETE`
    SeekComplete,
    /// `TRACK_ENDED`
    TrackEnded,
    /// `PLAYBACK_ERROR`
    PlaybackError,
    /// `REMOTE_NEXT`
    RemoteNext,
    /// `REMOTE_PREV`
    RemotePrev,
    /// `REMOTE_PLAY`
    RemotePlay,
    /// `REMOTE_PAUSE`
    RemotePause,
    /// Unrecognized wire tag
    Unknown,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StateChanged => "STATE_CHANGED",
            Self::Progress => "PROGRESS",
            Self::PlaybackSpeedChanged => "PLAYBACK_SPEED_CHANGED",
            Self::SeekComplete => "SEEK_COMPLETE",
            Self::TrackEnded => "TRACK_ENDED",
            Self::PlaybackError => "PLAYBACK_ERROR",
            Self::RemoteNext => "REMOTE_NEXT",
            Self::RemotePrev => "REMOTE_PREV",
            Self::RemotePlay => "REMOTE_PLAY",
            Self::RemotePause => "REMOTE_PAUSE",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PlayerOptions;

/// Playback states reported by the audio engine.
///
/// The store accepts any state carried by a state-changed event; transition
/// legality is the engine's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaybackState {
    /// No track loaded
    #[default]
    Idle,

    /// Playback stopped, track still loaded
    Stopped,

    /// Track is being loaded or buffered
    Loading,

    /// Track is playing
    Playing,

    /// Playback paused
    Paused,

    /// Engine reported an unrecoverable playback fault
    Error,
}

/// Immutable descriptor of the audio item associated with playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stable identifier assigned by the host
    pub id: String,

    /// Source URL of the audio
    pub url: String,

    /// Display title
    pub title: String,

    /// Artwork URL
    pub artwork: String,

    /// Album name (if available)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Artist name (if available)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

impl Track {
    /// Whether two descriptors name the same track.
    ///
    /// Identity is structural over the identifying fields only; `album`
    /// and `artist` are display metadata and do not participate.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
            && self.url == other.url
            && self.title == other.title
            && self.artwork == other.artwork
    }
}

/// Playback error reported by the engine, carried for downstream display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackError {
    /// Human-readable description from the engine
    pub message: String,

    /// Engine-specific error code
    pub code: i32,
}

/// Volume of the player
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    /// Create a new instance of a volume with safeguarded values
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the volume as a percentage
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Volume> for f64 {
    fn from(value: Volume) -> Self {
        value.0
    }
}

/// Playback rate multiplier with safeguarded values
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Slowest rate the engine supports
    pub const MIN: f64 = 0.25;

    /// Fastest rate the engine supports
    pub const MAX: f64 = 2.0;

    /// Create a new playback speed, clamped to the supported range
    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Deref for PlaybackSpeed {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for PlaybackSpeed {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(value: PlaybackSpeed) -> Self {
        value.0
    }
}

/// Snapshot of the current player status.
///
/// Replaced as a whole on every accepted event, never mutated in place, so
/// observers always see an atomic transition. The stored track is behind an
/// [`Arc`] and survives replacement untouched when an incoming descriptor is
/// structurally identical, so memoizing consumers can rely on pointer
/// identity ([`Arc::ptr_eq`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerState {
    /// Current playback state
    pub playback_state: PlaybackState,

    /// Playback position
    #[serde(with = "duration_ms")]
    pub position: Duration,

    /// Track duration, zero when unknown
    #[serde(with = "duration_ms")]
    pub duration: Duration,

    /// Playback rate multiplier
    pub playback_speed: PlaybackSpeed,

    /// Player volume
    pub volume: Volume,

    /// Debug logging of applied events
    pub debug: bool,

    /// Debug logging includes progress events
    pub debug_includes_progress: bool,

    /// Currently playing track, `None` when nothing is loaded
    pub track_playing: Option<Arc<Track>>,

    /// Last reported playback error, cleared by any state change
    pub error: Option<PlaybackError>,

    /// Host-supplied options, opaque to reconciliation
    pub options: PlayerOptions,
}

impl PlayerState {
    /// Initial snapshot for the given options.
    pub(crate) fn initial(options: PlayerOptions) -> Self {
        Self {
            playback_state: PlaybackState::Idle,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            playback_speed: PlaybackSpeed::default(),
            volume: Volume::default(),
            debug: options.debug,
            debug_includes_progress: options.debug_includes_progress,
            track_playing: None,
            error: None,
            options,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::initial(PlayerOptions::default())
    }
}

/// Millisecond wire representation for durations.
///
/// The engine bridge reports positions and durations as integer
/// milliseconds; `Duration`'s default serde form is not wire-compatible.
pub(crate) mod duration_ms {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Same as [`duration_ms`] for optional fields, where an absent key means
/// "leave the prior value unchanged".
pub(crate) mod duration_ms_opt {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = Option::<u64>::deserialize(deserializer)?;
        Ok(ms.map(Duration::from_millis))
    }
}

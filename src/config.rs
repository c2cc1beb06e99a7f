use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{PlayheadError, Result};

/// Content profile hint forwarded to the audio engine.
///
/// Engines use this to pick buffering and session behavior suited to
/// long-form speech versus music playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Music playback profile.
    #[default]
    Music,

    /// Spoken-word playback profile (podcasts, audiobooks).
    Speech,
}

/// Host-supplied player options.
///
/// Supplied once at store creation (or on `configure`) and carried in the
/// snapshot as an opaque sub-record; reconciliation never reads it beyond
/// the debug flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Content profile for the engine.
    #[serde(default)]
    pub content_type: ContentType,

    /// Enable debug logging of applied events.
    #[serde(default)]
    pub debug: bool,

    /// Include progress events in debug logging.
    ///
    /// Progress arrives at the reporting interval and floods logs, so it
    /// is opt-in separately from `debug`.
    #[serde(default)]
    pub debug_includes_progress: bool,

    /// Interval, in milliseconds, at which the engine reports progress.
    #[serde(default = "default_progress_interval_ms")]
    pub progress_interval_ms: u64,
}

fn default_progress_interval_ms() -> u64 {
    1000
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            content_type: ContentType::default(),
            debug: false,
            debug_includes_progress: false,
            progress_interval_ms: default_progress_interval_ms(),
        }
    }
}

impl PlayerOptions {
    /// Loads player options from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a partial file is
    /// valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| PlayheadError::toml_parse(e, Some(path)))
    }
}

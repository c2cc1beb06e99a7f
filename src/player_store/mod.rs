//! Reactive player state store with event reconciliation.
//!
//! Consumes playback notifications from an external audio engine and merges
//! them, one at a time, into an atomically replaced [`PlayerState`]
//! snapshot. Partial payloads never regress previously known values,
//! malformed payloads are dropped with a diagnostic, and structurally
//! unchanged tracks keep their identity across updates.

mod diagnostics;
mod events;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use diagnostics::{Diagnostic, LOG_TAG};
pub use events::{EventKind, PlayerEvent, TrackField};
pub use store::PlayerStore;
pub use types::{PlaybackError, PlaybackSpeed, PlaybackState, PlayerState, Track, Volume};

//! Playhead - Reconciling state store for external audio playback engines.
//!
//! An audio engine reports what it is doing through a stream of partial,
//! occasionally malformed event payloads. Playhead folds those events into
//! one coherent, observable snapshot of the current player status:
//!
//! - Whole-snapshot replacement on every accepted event, so observers see
//!   atomic transitions and never a torn read
//! - Partial payloads merge into prior state instead of regressing it
//! - Track descriptors keep their identity across updates when nothing
//!   about them changed, so memoizing consumers are not re-rendered
//! - Malformed events are dropped with a structured diagnostic, never a
//!   panic
//!
//! # Quick Start
//!
//! ```rust
//! use playhead::config::PlayerOptions;
//! use playhead::player_store::{PlayerEvent, PlayerStore, PlaybackState, TrackField};
//!
//! let store = PlayerStore::new(PlayerOptions::default());
//!
//! // The engine bridge feeds events in; observers read the snapshot.
//! store.update_from_event(PlayerEvent::StateChanged {
//!     track: TrackField::Unloaded,
//!     state: PlaybackState::Idle,
//! });
//! assert_eq!(store.state().playback_state, PlaybackState::Idle);
//! ```

/// Host-supplied player options.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive player state store with event reconciliation.
pub mod player_store;

/// Tracing subscriber setup for host applications.
pub mod tracing_config;

pub use crate::core::{PlayheadError, Result};
pub use config::PlayerOptions;
pub use player_store::{PlayerEvent, PlayerState, PlayerStore};

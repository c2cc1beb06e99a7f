use std::sync::{Arc, RwLock};

use async_stream::stream;
use futures::Stream;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::config::PlayerOptions;

use super::diagnostics::Diagnostic;
use super::events::{EventKind, PlayerEvent, TrackField};
use super::types::{PlayerState, Track, Volume};

/// Single-writer state store reconciling engine events into an observable
/// snapshot.
///
/// The store owns the one [`PlayerState`] slot. Every accepted event builds
/// a fresh snapshot from the previous one and swaps it in whole, then
/// notifies subscribers exactly once; dropped events (missing track payload,
/// remote commands, unknown kinds) notify nobody. Readers clone an `Arc` and
/// can never observe a half-applied update.
#[derive(Clone)]
pub struct PlayerStore {
    state: Arc<RwLock<Arc<PlayerState>>>,
    change_tx: broadcast::Sender<Arc<PlayerState>>,
    diagnostic_tx: broadcast::Sender<Diagnostic>,
}

impl PlayerStore {
    /// Creates a store holding the initial snapshot for the given options.
    pub fn new(options: PlayerOptions) -> Self {
        let (change_tx, _) = broadcast::channel(1024);
        let (diagnostic_tx, _) = broadcast::channel(64);

        Self {
            state: Arc::new(RwLock::new(Arc::new(PlayerState::initial(options)))),
            change_tx,
            diagnostic_tx,
        }
    }

    /// Returns the current snapshot, handling poisoned locks gracefully.
    pub fn state(&self) -> Arc<PlayerState> {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Reconciles one engine event into the snapshot.
    ///
    /// This is the sole entry point for engine notifications. Malformed
    /// events never panic and never surface an error: a non-error event
    /// without its track payload is dropped with a warning diagnostic, an
    /// unrecognized kind is ignored outright.
    pub fn update_from_event(&self, event: PlayerEvent) {
        let kind = event.kind();
        let missing_track = event.track().is_absent();

        let next = match event {
            PlayerEvent::Unknown => {
                debug!("ignoring unrecognized engine event");
                return;
            }
            PlayerEvent::PlaybackError { track, error } => self.apply(|prev| PlayerState {
                track_playing: merge_track(&prev.track_playing, track),
                error: Some(error),
                ..prev.clone()
            }),
            _ if missing_track => {
                self.report(Diagnostic::MissingTrack { kind });
                return;
            }
            PlayerEvent::RemoteNext { .. }
            | PlayerEvent::RemotePrev { .. }
            | PlayerEvent::RemotePlay { .. }
            | PlayerEvent::RemotePause { .. } => {
                debug!(kind = %kind, "remote command passed through");
                return;
            }
            PlayerEvent::StateChanged { track, state } => self.apply(|prev| PlayerState {
                track_playing: merge_track(&prev.track_playing, track),
                playback_state: state,
                error: None,
                ..prev.clone()
            }),
            PlayerEvent::Progress {
                track,
                position,
                duration,
            } => self.apply(|prev| PlayerState {
                track_playing: merge_track(&prev.track_playing, track),
                position: position.unwrap_or(prev.position),
                duration: duration.unwrap_or(prev.duration),
                ..prev.clone()
            }),
            PlayerEvent::PlaybackSpeedChanged { track, speed } => self.apply(|prev| PlayerState {
                track_playing: merge_track(&prev.track_playing, track),
                playback_speed: speed,
                ..prev.clone()
            }),
            PlayerEvent::SeekComplete { track } | PlayerEvent::TrackEnded { track } => {
                self.apply(|prev| PlayerState {
                    track_playing: merge_track(&prev.track_playing, track),
                    ..prev.clone()
                })
            }
        };

        if next.debug && (kind != EventKind::Progress || next.debug_includes_progress) {
            debug!(kind = %kind, state = ?next.playback_state, "applied engine event");
        }
    }

    /// Replaces the configuration sub-record and re-derives the debug flags
    /// from it.
    pub fn configure(&self, options: PlayerOptions) {
        self.apply(|prev| PlayerState {
            debug: options.debug,
            debug_includes_progress: options.debug_includes_progress,
            options,
            ..prev.clone()
        });
    }

    /// Restores the snapshot to its initial value.
    ///
    /// The configuration sub-record survives; everything else returns to
    /// the defaults it had at creation.
    pub fn reset(&self) {
        self.apply(|prev| PlayerState::initial(prev.options.clone()));
    }

    /// Sets the player volume. Volume never arrives via engine events; this
    /// is the host surface for it.
    pub fn set_volume(&self, volume: Volume) {
        self.apply(|prev| PlayerState {
            volume,
            ..prev.clone()
        });
    }

    /// Overrides the debug flags independently of the configured options.
    pub fn set_debug(&self, debug: bool, includes_progress: bool) {
        self.apply(|prev| PlayerState {
            debug,
            debug_includes_progress: includes_progress,
            ..prev.clone()
        });
    }

    /// Creates a stream of snapshots: the current one immediately, then one
    /// per accepted update.
    ///
    /// A subscriber that falls behind the channel skips the missed
    /// snapshots and resumes with newer ones; it always converges on the
    /// latest state.
    pub fn watch(&self) -> impl Stream<Item = Arc<PlayerState>> + Send {
        let mut changes = self.change_tx.subscribe();
        let current = self.state();

        stream! {
            yield current;

            loop {
                match changes.recv().await {
                    Ok(snapshot) => yield snapshot,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => return,
                }
            }
        }
    }

    /// Raw change channel, for hosts that manage their own receive loop.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<PlayerState>> {
        self.change_tx.subscribe()
    }

    /// Creates a stream of structured diagnostics (dropped events).
    pub fn diagnostics(&self) -> impl Stream<Item = Diagnostic> + Send {
        let mut diagnostics = self.diagnostic_tx.subscribe();

        stream! {
            loop {
                match diagnostics.recv().await {
                    Ok(diagnostic) => yield diagnostic,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => return,
                }
            }
        }
    }

    /// Raw diagnostics channel.
    pub fn subscribe_diagnostics(&self) -> broadcast::Receiver<Diagnostic> {
        self.diagnostic_tx.subscribe()
    }

    /// Swaps in a snapshot built from the previous one and notifies
    /// subscribers once.
    fn apply<F>(&self, build: F) -> Arc<PlayerState>
    where
        F: FnOnce(&PlayerState) -> PlayerState,
    {
        let next = {
            let mut slot = match self.state.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let next = Arc::new(build(&slot));
            *slot = Arc::clone(&next);
            next
        };

        let _ = self.change_tx.send(Arc::clone(&next));
        next
    }

    fn report(&self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        let _ = self.diagnostic_tx.send(diagnostic);
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new(PlayerOptions::default())
    }
}

/// Merges an event's track payload with the stored track.
///
/// An explicit unload always clears. A descriptor structurally identical to
/// the stored track keeps the stored `Arc` untouched, so pointer-equality
/// consumers see no change; anything else replaces it.
fn merge_track(current: &Option<Arc<Track>>, incoming: TrackField) -> Option<Arc<Track>> {
    match incoming {
        TrackField::Absent => current.clone(),
        TrackField::Unloaded => None,
        TrackField::Loaded(track) => match current {
            Some(existing) if existing.same_identity(&track) => Some(Arc::clone(existing)),
            _ => Some(Arc::new(track)),
        },
    }
}

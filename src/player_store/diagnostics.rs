use std::fmt;

use super::events::EventKind;

/// Tag prefixing every diagnostic line emitted by this crate.
pub const LOG_TAG: &str = "playhead";

/// Structured diagnostics emitted by the store.
///
/// Hosts subscribe to these independently of the tracing sink, so a UI can
/// surface dropped events without scraping log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A non-error event arrived without its required track payload and
    /// was dropped without touching the snapshot.
    MissingTrack {
        /// Kind of the dropped event
        kind: EventKind,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrack { kind } => {
                write!(
                    f,
                    "[{LOG_TAG}]: Event {kind} missing required track property"
                )
            }
        }
    }
}

//! Playback session for AerRadio
//!
//! Client-side playback logic: a single-slot state machine tracking the
//! one "now playing" station, its transport state, volume and last error.
//! The audio backend lives behind the [`AudioTransport`]/[`TransportFactory`]
//! seam and reports progress through generation-tagged [`TransportEvent`]s,
//! so events from a torn-down stream can never corrupt the session that
//! replaced it.
//!
//! State machine:
//!
//! ```text
//! Idle -> Loading -> Playing <-> Paused
//!            |          |
//!            v          v
//!         Errored <- Buffering
//! ```
//!
//! `Buffering` returns to `Playing` on recovery; `stop()` returns to
//! `Idle` from anywhere, preserving the volume.

pub mod session;
pub mod transport;

// Re-exports
pub use session::{PlaybackSession, SessionStatus, TransportState};
pub use transport::{AudioTransport, TransportEvent, TransportFactory};

//! Audio transport abstraction
//!
//! The playback session never talks to an audio backend directly; it
//! drives an [`AudioTransport`] obtained from a [`TransportFactory`]. This
//! is the seam where a browser audio element, a gstreamer pipeline or a
//! test double plugs in.
//!
//! Transports complete asynchronously: commands return immediately and the
//! backend reports progress by delivering [`TransportEvent`]s to the
//! session, tagged with the generation it was opened under (see
//! [`crate::session::PlaybackSession::handle_event`]).

/// Asynchronous notification from an open transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// The stream is ready and audible
    Ready,
    /// The stream stalled and is rebuffering (not an error)
    Stalled,
    /// Playback resumed after a stall or pause
    Resumed,
    /// The stream failed fatally; the payload is backend detail (logged,
    /// never surfaced to the user verbatim)
    Failed(String),
}

/// A single open audio stream
///
/// All commands are fire-and-forget; outcome arrives as events. `close`
/// must detach every event subscription before disposing the backend so a
/// released transport can no longer emit.
pub trait AudioTransport {
    /// Suspends playback, keeping the stream open
    fn pause(&mut self);

    /// Resumes playback after a pause
    fn resume(&mut self);

    /// Applies a volume in the range 0.0 to 1.0
    fn set_volume(&mut self, volume: f32);

    /// Stops and releases the stream, detaching event subscriptions
    fn close(&mut self);
}

/// Opens transports for the playback session
pub trait TransportFactory {
    /// Starts an asynchronous open against `url`
    ///
    /// `generation` tags every event this transport will emit; `volume` is
    /// the initial volume in the range 0.0 to 1.0.
    fn open(&self, url: &str, generation: u64, volume: f32) -> Box<dyn AudioTransport>;
}

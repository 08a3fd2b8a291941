//! Single-slot playback session state machine
//!
//! At most one station is "now playing" per session. The session runs on a
//! single-threaded, event-driven model: UI calls (`play`, `pause`,
//! `set_volume`, `stop`) mutate it directly, while the audio backend
//! reports progress asynchronously through [`PlaybackSession::handle_event`].
//!
//! Every `play`/`stop` bumps a generation counter and the events of a
//! transport carry the generation it was opened under, so a late event
//! from a torn-down transport is provably ignored rather than corrupting
//! the state of its successor.

use aercatalog::Station;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::transport::{AudioTransport, TransportEvent, TransportFactory};

/// Transport state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransportState {
    /// No station loaded
    Idle,
    /// Stream open in flight
    Loading,
    Playing,
    Paused,
    /// Stalled mid-stream, waiting for data (not an error)
    Buffering,
    /// Stream failed; see `last_error`
    Errored,
}

/// Serializable snapshot of the session for UI consumption
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub current_station: Option<Station>,
    pub state: TransportState,
    pub volume: u8,
    pub last_error: Option<String>,
    pub is_playing: bool,
    pub is_loading: bool,
}

/// Single active-stream playback session
pub struct PlaybackSession {
    factory: Box<dyn TransportFactory>,
    transport: Option<Box<dyn AudioTransport>>,
    current_station: Option<Station>,
    state: TransportState,
    /// 0-100, independent of the transport state
    volume: u8,
    last_error: Option<String>,
    /// Bumped on every play/stop; events from older transports are stale
    generation: u64,
}

impl PlaybackSession {
    /// Creates an idle session
    pub fn new(factory: Box<dyn TransportFactory>, initial_volume: u8) -> Self {
        Self {
            factory,
            transport: None,
            current_station: None,
            state: TransportState::Idle,
            volume: initial_volume.min(100),
            last_error: None,
            generation: 0,
        }
    }

    /// Starts playing a station
    ///
    /// Any previous transport is fully released (closed and dropped)
    /// before the new stream is opened, so exactly one transport is ever
    /// live. Completion is asynchronous: the session stays in `Loading`
    /// until the transport reports `Ready`. Calling `play` with the
    /// station already playing reloads the stream; treating that as a
    /// pause toggle is caller policy.
    pub fn play(&mut self, station: Station) {
        self.teardown_transport();
        self.generation += 1;
        self.last_error = None;
        self.state = TransportState::Loading;

        info!(station = %station.name, url = %station.stream_url, "Opening stream");
        let transport =
            self.factory
                .open(&station.stream_url, self.generation, ratio(self.volume));
        self.current_station = Some(station);
        self.transport = Some(transport);
    }

    /// Suspends playback; no-op unless currently Playing or Buffering
    pub fn pause(&mut self) {
        if !matches!(
            self.state,
            TransportState::Playing | TransportState::Buffering
        ) {
            return;
        }
        if let Some(transport) = self.transport.as_mut() {
            transport.pause();
            self.state = TransportState::Paused;
        }
    }

    /// Resumes a paused stream; no-op from any other state
    pub fn resume(&mut self) {
        if self.state != TransportState::Paused {
            return;
        }
        if let Some(transport) = self.transport.as_mut() {
            transport.resume();
            self.state = TransportState::Playing;
        }
    }

    /// Sets the session volume, clamped to 0-100
    ///
    /// Propagates immediately to an open transport regardless of
    /// play/pause state; never changes the transport state.
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, 100) as u8;
        if let Some(transport) = self.transport.as_mut() {
            transport.set_volume(ratio(self.volume));
        }
    }

    /// Stops playback and returns the session to Idle, preserving volume
    pub fn stop(&mut self) {
        self.teardown_transport();
        self.generation += 1;
        self.current_station = None;
        self.state = TransportState::Idle;
        self.last_error = None;
    }

    /// Delivers an asynchronous transport event
    ///
    /// Events tagged with a generation other than the current one come
    /// from a transport that has already been torn down and are dropped.
    pub fn handle_event(&mut self, generation: u64, event: TransportEvent) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "Ignoring stale transport event"
            );
            return;
        }
        if self.transport.is_none() {
            return;
        }

        match event {
            TransportEvent::Ready => {
                if matches!(
                    self.state,
                    TransportState::Loading | TransportState::Buffering
                ) {
                    self.state = TransportState::Playing;
                }
            }
            TransportEvent::Resumed => {
                if matches!(
                    self.state,
                    TransportState::Paused | TransportState::Buffering
                ) {
                    self.state = TransportState::Playing;
                }
            }
            TransportEvent::Stalled => {
                if matches!(
                    self.state,
                    TransportState::Playing | TransportState::Loading
                ) {
                    self.state = TransportState::Buffering;
                }
            }
            TransportEvent::Failed(detail) => {
                let station_name = self
                    .current_station
                    .as_ref()
                    .map(|s| s.name.as_str())
                    .unwrap_or("station");
                warn!(station = station_name, %detail, "Stream failed");

                let mut message =
                    format!("Unable to play {station_name}. Stream may be unavailable.");
                if let Some(website) = self
                    .current_station
                    .as_ref()
                    .and_then(|s| s.website.as_deref())
                {
                    message.push_str(&format!(" Listen directly at {website}."));
                }

                self.teardown_transport();
                self.state = TransportState::Errored;
                self.last_error = Some(message);
            }
        }
    }

    /// Closes and drops the current transport, if any
    ///
    /// Close detaches the transport's event subscriptions before the
    /// backend is disposed, so no further events can fire from it.
    fn teardown_transport(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            transport.close();
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn current_station(&self) -> Option<&Station> {
        self.current_station.as_ref()
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Generation of the currently open transport
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    /// True while the stream is opening or rebuffering
    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            TransportState::Loading | TransportState::Buffering
        )
    }

    /// Snapshot for UI consumption
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            current_station: self.current_station.clone(),
            state: self.state,
            volume: self.volume,
            last_error: self.last_error.clone(),
            is_playing: self.is_playing(),
            is_loading: self.is_loading(),
        }
    }
}

/// Maps the 0-100 session volume onto the 0.0-1.0 transport range
fn ratio(volume: u8) -> f32 {
    f32::from(volume) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Open { url: String, generation: u64, volume: f32 },
        Pause,
        Resume,
        SetVolume(f32),
        Close,
    }

    /// Factory recording every command issued to every transport it opened
    #[derive(Default)]
    struct FakeFactory {
        log: Rc<RefCell<Vec<Command>>>,
    }

    struct FakeTransport {
        log: Rc<RefCell<Vec<Command>>>,
    }

    impl TransportFactory for FakeFactory {
        fn open(&self, url: &str, generation: u64, volume: f32) -> Box<dyn AudioTransport> {
            self.log.borrow_mut().push(Command::Open {
                url: url.to_string(),
                generation,
                volume,
            });
            Box::new(FakeTransport {
                log: self.log.clone(),
            })
        }
    }

    impl AudioTransport for FakeTransport {
        fn pause(&mut self) {
            self.log.borrow_mut().push(Command::Pause);
        }
        fn resume(&mut self) {
            self.log.borrow_mut().push(Command::Resume);
        }
        fn set_volume(&mut self, volume: f32) {
            self.log.borrow_mut().push(Command::SetVolume(volume));
        }
        fn close(&mut self) {
            self.log.borrow_mut().push(Command::Close);
        }
    }

    fn station(id: u32, name: &str, website: Option<&str>) -> Station {
        Station {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            frequency: None,
            description: None,
            stream_url: format!("https://stream.example/{id}"),
            logo_url: None,
            website: website.map(str::to_string),
            genre: Some("Music".to_string()),
            location: None,
            is_active: true,
            gradient_from: "hsl(0, 0%, 0%)".to_string(),
            gradient_to: "hsl(0, 0%, 100%)".to_string(),
        }
    }

    fn session() -> (Rc<RefCell<Vec<Command>>>, PlaybackSession) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let factory = FakeFactory { log: log.clone() };
        (log, PlaybackSession::new(Box::new(factory), 70))
    }

    #[test]
    fn play_opens_transport_and_ready_starts_playback() {
        let (log, mut session) = session();
        session.play(station(1, "Today FM", None));

        assert_eq!(session.state(), TransportState::Loading);
        assert_eq!(session.current_station().unwrap().id, 1);
        assert_eq!(
            log.borrow()[0],
            Command::Open {
                url: "https://stream.example/1".to_string(),
                generation: 1,
                volume: 0.7,
            }
        );

        session.handle_event(1, TransportEvent::Ready);
        assert!(session.is_playing());
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn switching_stations_releases_the_old_transport_first() {
        let (log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.handle_event(1, TransportEvent::Ready);

        session.play(station(2, "Newstalk", None));

        // Old transport closed before the new stream was opened
        let commands = log.borrow().clone();
        let close_at = commands.iter().position(|c| *c == Command::Close).unwrap();
        let second_open = commands
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Command::Open { .. }))
            .nth(1)
            .map(|(i, _)| i)
            .unwrap();
        assert!(close_at < second_open);
        assert_eq!(session.current_station().unwrap().id, 2);
        assert_eq!(session.state(), TransportState::Loading);
    }

    #[test]
    fn stale_ready_event_from_old_transport_is_ignored() {
        let (_log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.play(station(2, "Newstalk", None));

        // A's late ready arrives after its teardown
        session.handle_event(1, TransportEvent::Ready);
        assert_eq!(session.state(), TransportState::Loading);

        session.handle_event(2, TransportEvent::Ready);
        assert!(session.is_playing());
    }

    #[test]
    fn events_after_stop_are_ignored() {
        let (_log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.stop();

        session.handle_event(1, TransportEvent::Failed("gone".into()));
        assert_eq!(session.state(), TransportState::Idle);
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn pause_and_resume_round_trip() {
        let (log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.handle_event(1, TransportEvent::Ready);

        session.pause();
        assert_eq!(session.state(), TransportState::Paused);

        // Pausing again is a no-op
        session.pause();
        let pauses = log
            .borrow()
            .iter()
            .filter(|c| **c == Command::Pause)
            .count();
        assert_eq!(pauses, 1);

        session.resume();
        assert!(session.is_playing());
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn pause_is_a_noop_when_idle() {
        let (log, mut session) = session();
        session.pause();
        assert_eq!(session.state(), TransportState::Idle);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn volume_is_clamped_and_propagated_while_paused() {
        let (log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.handle_event(1, TransportEvent::Ready);
        session.pause();

        session.set_volume(150);
        assert_eq!(session.volume(), 100);
        session.set_volume(-5);
        assert_eq!(session.volume(), 0);

        let volumes: Vec<_> = log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Command::SetVolume(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(volumes, vec![1.0, 0.0]);
        // Volume changes never alter the transport state
        assert_eq!(session.state(), TransportState::Paused);
    }

    #[test]
    fn buffering_is_not_an_error_and_recovers() {
        let (_log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.handle_event(1, TransportEvent::Ready);

        session.handle_event(1, TransportEvent::Stalled);
        assert_eq!(session.state(), TransportState::Buffering);
        assert!(session.is_loading());
        assert_eq!(session.last_error(), None);

        session.handle_event(1, TransportEvent::Ready);
        assert!(session.is_playing());
    }

    #[test]
    fn failure_sets_descriptive_error_and_releases_transport() {
        let (log, mut session) = session();
        session.play(station(1, "Spirit Radio", Some("https://www.spiritradio.ie")));
        session.handle_event(1, TransportEvent::Failed("404 from upstream".into()));

        assert_eq!(session.state(), TransportState::Errored);
        let error = session.last_error().unwrap();
        assert!(error.contains("Spirit Radio"));
        assert!(error.contains("https://www.spiritradio.ie"));
        // Backend detail is not leaked to the user
        assert!(!error.contains("404"));
        assert_eq!(log.borrow().last(), Some(&Command::Close));
        // The station stays visible so the UI can show what failed
        assert_eq!(session.current_station().unwrap().name, "Spirit Radio");
    }

    #[test]
    fn play_after_failure_clears_the_error() {
        let (_log, mut session) = session();
        session.play(station(1, "Today FM", None));
        session.handle_event(1, TransportEvent::Failed("boom".into()));
        assert!(session.last_error().is_some());

        session.play(station(2, "Newstalk", None));
        assert_eq!(session.state(), TransportState::Loading);
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn stop_resets_everything_but_volume() {
        let (_log, mut session) = session();
        session.set_volume(30);
        session.play(station(1, "Today FM", None));
        session.handle_event(1, TransportEvent::Ready);

        session.stop();
        assert_eq!(session.state(), TransportState::Idle);
        assert!(session.current_station().is_none());
        assert_eq!(session.last_error(), None);
        assert_eq!(session.volume(), 30);
    }

    #[test]
    fn status_snapshot_serializes_camel_case() {
        let (_log, mut session) = session();
        session.play(station(1, "Today FM", None));
        let json = serde_json::to_value(session.status()).unwrap();
        assert_eq!(json["state"], "Loading");
        assert_eq!(json["isLoading"], true);
        assert_eq!(json["isPlaying"], false);
        assert_eq!(json["currentStation"]["slug"], "today-fm");
    }
}

//! Drives a playback session against a scripted transport and prints the
//! state after each step.
//!
//! Run with: cargo run -p aerplayer --example session_demo

use aercatalog::CatalogStore;
use aerplayer::{AudioTransport, PlaybackSession, TransportEvent, TransportFactory};

struct PrintingFactory;

struct PrintingTransport;

impl TransportFactory for PrintingFactory {
    fn open(&self, url: &str, generation: u64, volume: f32) -> Box<dyn AudioTransport> {
        println!("  [transport] open {url} (generation {generation}, volume {volume:.2})");
        Box::new(PrintingTransport)
    }
}

impl AudioTransport for PrintingTransport {
    fn pause(&mut self) {
        println!("  [transport] pause");
    }
    fn resume(&mut self) {
        println!("  [transport] resume");
    }
    fn set_volume(&mut self, volume: f32) {
        println!("  [transport] volume {volume:.2}");
    }
    fn close(&mut self) {
        println!("  [transport] close");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogStore::builtin()?;
    let today_fm = catalog.get_by_slug("today-fm").unwrap().clone();
    let newstalk = catalog.get_by_slug("newstalk").unwrap().clone();

    let mut session = PlaybackSession::new(Box::new(PrintingFactory), 70);

    println!("play {}", today_fm.name);
    session.play(today_fm);
    session.handle_event(session.generation(), TransportEvent::Ready);
    println!("  state: {:?}", session.state());

    println!("switch to {}", newstalk.name);
    session.play(newstalk);
    // A late event from the old stream: dropped by the generation guard
    session.handle_event(session.generation() - 1, TransportEvent::Ready);
    println!("  state after stale event: {:?}", session.state());
    session.handle_event(session.generation(), TransportEvent::Ready);
    println!("  state: {:?}", session.state());

    println!("pause, volume down, resume");
    session.pause();
    session.set_volume(40);
    session.resume();
    println!("  state: {:?}, volume {}", session.state(), session.volume());

    println!("stop");
    session.stop();
    println!("  state: {:?}, volume {}", session.state(), session.volume());

    Ok(())
}

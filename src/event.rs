use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event};
use tracing::warn;

/// Reads terminal events on a background thread so the frame loop can drain
/// them without blocking. Only raw events cross the channel; all game state
/// stays on the main thread.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    warn!(%err, "terminal event read failed");
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Everything that arrived since the last call, oldest first.
    pub fn drain(&self) -> Vec<Event> {
        self.rx.try_iter().collect()
    }
}

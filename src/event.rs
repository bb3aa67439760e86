use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Reads terminal events on a background thread and hands them to the UI loop.
///
/// The reader thread owns the only sender, so `next` fails once it stops.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let app_event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                    Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(_) => continue,
                    Err(err) => {
                        warn!(error = %err, "terminal event read failed");
                        return;
                    }
                };
                if tx.send(app_event).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

//! Terminal input thread and the application event channel.
//!
//! Keys and ticks come from a dedicated OS thread because
//! `crossterm::event::poll()` blocks. The loader task writes to the same
//! channel through [`EventHandler::sender`].

use crate::app::Record;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal size changed; the loop redraws on receipt.
    Resize,
    Tick,
    /// The startup load succeeded.
    RecordsLoaded(Vec<Record>),
    /// The startup load failed. Logged, never shown to the user.
    LoadFailed(String),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
    shutdown: Arc<AtomicBool>,
    input_thread: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));

        let input_thread = {
            let tx = tx.clone();
            let shutdown = Arc::clone(&shutdown);
            std::thread::spawn(move || pump_terminal(&tx, &shutdown, tick_rate))
        };

        Self {
            rx,
            tx,
            shutdown,
            input_thread: Some(input_thread),
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Signals the input thread and waits for it to finish its current poll.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.input_thread.take() {
            if let Err(payload) = handle.join() {
                tracing::error!("input thread panicked: {}", panic_message(payload));
            }
        }
    }
}

impl Drop for EventHandler {
    // No join here: a blocked poll during unwinding would hang the process.
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

/// Reads the terminal until shutdown is requested or the receiver goes away.
fn pump_terminal(tx: &mpsc::UnboundedSender<AppEvent>, shutdown: &AtomicBool, tick_rate: Duration) {
    while !shutdown.load(Ordering::Relaxed) {
        let event = match event::poll(tick_rate) {
            Ok(false) => AppEvent::Tick,
            Ok(true) => match event::read() {
                Ok(CrosstermEvent::Key(key)) => AppEvent::Key(key),
                Ok(CrosstermEvent::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::error!("terminal read error: {e}");
                    return;
                }
            },
            Err(e) => {
                tracing::error!("terminal poll error: {e}");
                return;
            }
        };
        if tx.send(event).is_err() {
            return;
        }
    }
}

/// Best-effort text of a panic payload from `JoinHandle::join` or a tokio
/// `JoinError`.
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(s) => *s,
        Err(payload) => payload
            .downcast::<&str>()
            .map_or_else(|_| "unknown panic".to_string(), |s| (*s).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_from_str() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
    }

    #[test]
    fn panic_message_from_string() {
        assert_eq!(panic_message(Box::new(String::from("bad id"))), "bad id");
    }

    #[test]
    fn panic_message_unknown_payload() {
        assert_eq!(panic_message(Box::new(42_u8)), "unknown panic");
    }

    #[tokio::test]
    async fn sender_feeds_the_same_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut handler = EventHandler {
            rx,
            tx,
            shutdown: Arc::new(AtomicBool::new(false)),
            input_thread: None,
        };
        handler
            .sender()
            .send(AppEvent::LoadFailed("HTTP 500".to_string()))
            .unwrap();
        assert!(matches!(handler.next().await, Some(AppEvent::LoadFailed(m)) if m == "HTTP 500"));
        handler.stop();
        assert!(handler.shutdown.load(Ordering::Relaxed));
    }
}

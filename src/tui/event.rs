use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

/// What the editor loop reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal size changed; the next draw picks up the new area
    Resize,
    /// Housekeeping tick: flash expiry, pulse expiry, spinner
    Tick,
}

/// Map a terminal event to an editor event. Key releases and repeats are
/// dropped so each press mutates a score exactly once.
fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

/// Merges terminal input and the UI tick into one ordered stream
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(pump(tx, Duration::from_millis(tick_rate_ms)));
        EventHandler { rx }
    }

    /// Next event; ticks forever once the input task has stopped
    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, tick_rate: Duration) {
    let mut input = crossterm::event::EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        let event = tokio::select! {
            read = input.next() => match read {
                Some(Ok(raw)) => translate(raw),
                Some(Err(e)) => {
                    tracing::warn!("terminal input error: {}", e);
                    None
                }
                None => break,
            },
            _ = ticker.tick() => Some(Event::Tick),
        };

        if let Some(event) = event {
            if tx.send(event).is_err() {
                break;
            }
        }
    }
}

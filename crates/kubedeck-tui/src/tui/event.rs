use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Terminal events the application reacts to
#[derive(Clone, Debug)]
pub enum Event {
    /// Periodic tick, drives refresh timers and redraws
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size
    Resize,
}

/// Terminal input source.
///
/// A background task forwards key presses and resizes from the crossterm
/// event stream; ticks are produced locally in [`next`](Self::next) so a
/// stalled input stream cannot stall the tick cadence. If the input stream
/// fails or ends, the handler keeps ticking and simply stops delivering
/// keys.
pub struct EventHandler {
    inputs: mpsc::UnboundedReceiver<Event>,
    input_open: bool,
    tick: Interval,
    cancel: CancellationToken,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, inputs) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let token = cancel.clone();
        tokio::spawn(async move {
            let mut stream = event::EventStream::new();

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,

                    maybe_event = stream.next() => {
                        let forwarded = match maybe_event {
                            // Filter out release events (important for Windows)
                            Some(Ok(CrosstermEvent::Key(key))) => {
                                if key.kind == KeyEventKind::Press {
                                    Some(Event::Key(key))
                                } else {
                                    None
                                }
                            }
                            Some(Ok(CrosstermEvent::Resize(_, _))) => Some(Event::Resize),
                            Some(Ok(_)) => None,
                            Some(Err(_)) | None => break,
                        };

                        if let Some(event) = forwarded {
                            if sender.send(event).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        let mut tick = tokio::time::interval(tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            inputs,
            input_open: true,
            tick,
            cancel,
        }
    }

    /// Next input event or tick, whichever arrives first
    pub async fn next(&mut self) -> Event {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Event::Tick,

                maybe_event = self.inputs.recv(), if self.input_open => {
                    match maybe_event {
                        Some(event) => return event,
                        None => self.input_open = false,
                    }
                }
            }
        }
    }

    /// Stop the input forwarding task
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ticks_flow_without_terminal_input() {
        let mut events = EventHandler::new(Duration::from_millis(1));

        // With no one at the keyboard, the interval alone must keep the
        // event source alive.
        let mut saw_tick = false;
        for _ in 0..5 {
            if matches!(events.next().await, Event::Tick) {
                saw_tick = true;
                break;
            }
        }
        assert!(saw_tick);

        events.shutdown();
    }
}

//! Low-level input collection: crossterm polling and translation into primitive events
//! that the higher-level input service can consume.
//!
//! Resize events are forwarded one for one; the backdrop reacts to every resize, so
//! nothing here merges or drops them.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Text delivered by the terminal's bracketed paste
    Paste(String),
}

/// Collector that polls crossterm for events and queues the ones the app cares about.
#[derive(Debug, Default)]
pub struct RawInputCollector {
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the collector has no pending events.
    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.pop_pending() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Paste(text) => {
                self.pending_events.push_back(RawInputEvent::Paste(text));
            }
            _ => {}
        }
    }

    /// Pop the next pending raw event.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
    };

    fn key_press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn queues_key_events() {
        let mut collector = RawInputCollector::new();
        collector.process_event(key_press(KeyCode::Char('j')));

        match collector.pop_pending().unwrap() {
            RawInputEvent::Key(key) => assert_eq!(key.code, KeyCode::Char('j')),
            other => panic!("expected key event, got {other:?}"),
        }
        assert!(collector.is_idle());
    }

    #[test]
    fn every_resize_is_forwarded() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Resize(80, 24));
        collector.process_event(Event::Resize(80, 24));
        collector.process_event(Event::Resize(120, 40));

        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize {
                width: 80,
                height: 24
            })
        );
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize {
                width: 80,
                height: 24
            })
        );
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize {
                width: 120,
                height: 40
            })
        );
    }

    #[test]
    fn paste_is_kept_whole_and_mouse_is_ignored() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        collector.process_event(Event::Paste("line one\nline two".to_string()));

        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Paste("line one\nline two".to_string()))
        );
        assert!(collector.is_idle());
    }
}

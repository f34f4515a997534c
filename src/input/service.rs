//! High-level input service.
//!
//! Consumes raw events, runs the key-binding state machine, and yields domain-level
//! `InputAction`s that the action dispatcher applies to the page.

use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// High-level input actions emitted by the state machine/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    InsertChar(char),
    InsertText(String),
    /// Enter: newline in the text, download from the filename field
    Enter,
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    NextField,
    PasteClipboard,
    Clear,
    Download,
    Quit,
    Resize {
        width: u16,
        height: u16,
    },
    NoAction,
    InvalidInput,
}

/// Key bindings of the converter screen.
///
/// Editing keys go to whichever field has focus; the control chords trigger the
/// panel actions.
#[derive(Debug, Default)]
pub struct InputStateMachine {
    /// Set once a quit key has been seen; later keys are ignored
    quitting: bool,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press || self.quitting {
            return InputAction::NoAction;
        }

        let action = match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _) => InputAction::Quit,
            (KeyCode::Char('v'), KeyModifiers::CONTROL) => InputAction::PasteClipboard,
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => InputAction::Clear,
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => InputAction::Download,
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => InputAction::NextField,
            (KeyCode::Enter, _) => InputAction::Enter,
            (KeyCode::Backspace, _) => InputAction::Backspace,
            (KeyCode::Delete, _) => InputAction::Delete,
            (KeyCode::Left, _) => InputAction::MoveLeft,
            (KeyCode::Right, _) => InputAction::MoveRight,
            (KeyCode::Home, _) => InputAction::MoveHome,
            (KeyCode::End, _) => InputAction::MoveEnd,
            (KeyCode::Char(ch), modifiers)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                InputAction::InsertChar(ch)
            }
            _ => InputAction::InvalidInput,
        };

        if action == InputAction::Quit {
            self.quitting = true;
        }
        action
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    state_machine: InputStateMachine,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            state_machine: InputStateMachine::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.pop_pending() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.pop_pending() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.state_machine.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Paste(text) => InputAction::InsertText(text),
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn control_chords_map_to_panel_actions() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.handle_key_event(ctrl('v')), InputAction::PasteClipboard);
        assert_eq!(sm.handle_key_event(ctrl('l')), InputAction::Clear);
        assert_eq!(sm.handle_key_event(ctrl('s')), InputAction::Download);
        assert_eq!(sm.handle_key_event(ctrl('x')), InputAction::InvalidInput);
    }

    #[test]
    fn typing_passes_characters_through() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            InputAction::InsertChar('A')
        );
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('ក'), KeyModifiers::NONE)),
            InputAction::InsertChar('ក')
        );
        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::InsertChar('q')
        );
    }

    #[test]
    fn releases_are_ignored_and_quit_is_final() {
        let mut sm = InputStateMachine::new();
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(sm.handle_key_event(release), InputAction::NoAction);

        assert_eq!(
            sm.handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            InputAction::Quit
        );
        assert!(sm.is_quitting());
        assert_eq!(sm.handle_key_event(ctrl('s')), InputAction::NoAction);
    }

    #[test]
    fn keyboard_events_pass_through_state_machine() {
        let mut service = InputService::new();
        assert_eq!(service.process_event(key(KeyCode::Tab)), vec![InputAction::NextField]);
        assert_eq!(service.process_event(key(KeyCode::Enter)), vec![InputAction::Enter]);
        assert_eq!(
            service.process_event(key(KeyCode::Backspace)),
            vec![InputAction::Backspace]
        );
        assert!(service.process_event(key(KeyCode::F(5))).is_empty());
    }

    #[test]
    fn resize_and_paste_become_actions() {
        let mut service = InputService::new();
        assert_eq!(
            service.process_event(Event::Resize(100, 30)),
            vec![InputAction::Resize {
                width: 100,
                height: 30
            }]
        );
        assert_eq!(
            service.process_event(Event::Paste("hello\nworld".to_string())),
            vec![InputAction::InsertText("hello\nworld".to_string())]
        );
    }
}

//! Action dispatch.
//!
//! Applies `InputAction`s to the page and reports the side effects the event loop has to
//! carry out (a clipboard read, quitting). The dispatcher itself never blocks: the
//! clipboard read runs elsewhere and its result comes back through
//! [`ActionDispatcher::finish_clipboard`].

use crate::app::Page;
use crate::background::Viewport;
use crate::converter::Field;
use crate::error::Result;
use crate::input::InputAction;
use crate::render::ui::ViewState;

/// Work the event loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start an asynchronous clipboard read
    ReadClipboard,
    Quit,
}

/// Tracks dispatch state that must persist across actions.
#[derive(Debug, Default)]
pub struct ActionDispatcher {
    clipboard_in_flight: bool,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clipboard_in_flight(&self) -> bool {
        self.clipboard_in_flight
    }

    pub fn process_action(
        &mut self,
        action: InputAction,
        page: &mut Page,
        view_state: &mut ViewState,
    ) -> Effect {
        let panel = &mut page.panel;
        match action {
            InputAction::Quit => return Effect::Quit,
            InputAction::InsertChar(ch) => panel.insert_char(ch),
            InputAction::InsertText(text) => panel.insert_str(&text),
            InputAction::Enter => match panel.focus() {
                Field::Text => panel.insert_newline(),
                Field::Filename => {
                    panel.download();
                }
            },
            InputAction::Backspace => panel.backspace(),
            InputAction::Delete => panel.delete(),
            InputAction::MoveLeft => panel.move_left(),
            InputAction::MoveRight => panel.move_right(),
            InputAction::MoveHome => panel.move_home(),
            InputAction::MoveEnd => panel.move_end(),
            InputAction::NextField => panel.focus_next(),
            InputAction::PasteClipboard => {
                // One read at a time; a second request while waiting is dropped
                if self.clipboard_in_flight {
                    log::debug!("clipboard read already in progress");
                    return Effect::None;
                }
                self.clipboard_in_flight = true;
                view_state.clipboard_pending = true;
                return Effect::ReadClipboard;
            }
            InputAction::Clear => panel.clear(),
            InputAction::Download => {
                panel.download();
            }
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
                page.resize(Viewport::new(width, height));
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }
        Effect::None
    }

    /// Apply a finished clipboard read
    pub fn finish_clipboard(
        &mut self,
        result: Result<String>,
        page: &mut Page,
        view_state: &mut ViewState,
    ) -> bool {
        self.clipboard_in_flight = false;
        view_state.clipboard_pending = false;
        page.panel.apply_clipboard(result)
    }
}

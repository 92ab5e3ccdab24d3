//! Key mapping from terminal events to player inputs.
//!
//! Letters, digits, hyphen, apostrophe and underscore are gameplay input, so
//! quitting is Esc or Ctrl-C rather than a letter key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Keystroke;

/// Non-typing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    CycleDifficulty,
    Restart,
    Quit,
}

/// What a key event means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Type(Keystroke),
    Control(Control),
}

/// Map a keyboard event to a player input.
pub fn map_key_event(key: KeyEvent) -> Option<PlayerInput> {
    if should_quit(key) {
        return Some(PlayerInput::Control(Control::Quit));
    }
    match key.code {
        KeyCode::Backspace => Some(PlayerInput::Type(Keystroke::Backspace)),
        KeyCode::Tab => Some(PlayerInput::Control(Control::CycleDifficulty)),
        KeyCode::Enter => Some(PlayerInput::Control(Control::Restart)),
        KeyCode::Char(c) => Some(PlayerInput::Type(Keystroke::Char(c))),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

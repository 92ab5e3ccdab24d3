//! Terminal input module.
//!
//! Maps `crossterm` key events into gameplay keystrokes and session controls.
//! Independent of any UI framework.

pub mod map;

pub use map::{map_key_event, should_quit, Control, PlayerInput};

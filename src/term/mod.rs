//! Terminal rendering module.
//!
//! A small framebuffer-based game renderer: `core` stays pure and testable,
//! `GameView` projects state into a framebuffer, and `TerminalRenderer`
//! flushes diffs to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

//! A falling-word typing game for vocabulary practice in the terminal.
//!
//! Words drop down a simulated canvas while the player types them out.
//! Difficulty controls how much of each word is revealed and how strictly
//! input is matched, up to exact-case coding identifiers. The crate is split
//! into a pure game core (`core`), terminal input mapping (`input`), a
//! framebuffer-based renderer (`term`), vocabulary loading (`vocab`), a
//! quiz-mode generator (`quiz`), and per-term progress persistence
//! (`progress`).

pub mod core;
pub mod input;
pub mod progress;
pub mod quiz;
pub mod term;
pub mod types;
pub mod vocab;

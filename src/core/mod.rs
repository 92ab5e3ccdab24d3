//! Core module - pure simulation logic with no I/O dependencies
//!
//! Everything here is deterministic given a seed, which is what the
//! integration tests and the benchmark lean on.

pub mod game_state;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod spawner;

pub use game_state::{FallingWord, GameConfig, GameState, Keystroke};
pub use matcher::{MatchPolicy, Reveal};
pub use spawner::WordSpawner;

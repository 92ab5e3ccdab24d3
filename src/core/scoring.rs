//! Scoring module - pure accumulation arithmetic and derived metrics.
//!
//! Score, words-per-minute and keystroke accuracy are simple functions of the
//! running counters; the terminal summary is assembled from those counters
//! directly so the reported values can never drift from the accumulators.

use crate::types::{SessionSummary, SCORE_PER_CHAR};

/// Points awarded for completing a term.
pub fn word_score(term_len: usize) -> u32 {
    SCORE_PER_CHAR * term_len as u32
}

/// Words per minute over the elapsed session time.
pub fn words_per_minute(words_typed: u32, elapsed_seconds: f32) -> f32 {
    if elapsed_seconds <= 0.0 {
        return 0.0;
    }
    words_typed as f32 / (elapsed_seconds / 60.0)
}

/// Keystroke accuracy in 0..=1. With no keystrokes recorded this is 1.0,
/// so the HUD shows 100% before any input.
pub fn accuracy(correct_keystrokes: u32, total_keystrokes: u32) -> f32 {
    if total_keystrokes == 0 {
        return 1.0;
    }
    correct_keystrokes as f32 / total_keystrokes as f32
}

/// Assemble the terminal summary from the running accumulators.
pub fn session_summary(
    score: u32,
    wave: u32,
    words_typed: u32,
    elapsed_seconds: f32,
    correct_keystrokes: u32,
    total_keystrokes: u32,
) -> SessionSummary {
    SessionSummary {
        score,
        wave,
        words_typed,
        elapsed_seconds,
        accuracy: accuracy(correct_keystrokes, total_keystrokes),
    }
}

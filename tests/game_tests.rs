//! Integration tests for the falling-word session

use tui_typer::core::{GameConfig, GameState, Keystroke};
use tui_typer::types::{
    CodingConvention, Difficulty, Outcome, MISS_LIMIT, SPAWN_INTERVAL_MS, TICK_MS, WAVE_DURATION_S,
};
use tui_typer::vocab::VocabTerm;

fn entry(term: &str, convention: CodingConvention) -> VocabTerm {
    VocabTerm {
        term: term.to_string(),
        definition: format!("definition of {}", term),
        strand: "test".to_string(),
        preferred: false,
        case_sensitive: false,
        coding_convention: convention,
    }
}

fn session(terms: &[&str], difficulty: Difficulty) -> GameState {
    let vocab = terms
        .iter()
        .map(|t| entry(t, CodingConvention::None))
        .collect();
    let mut state = GameState::new(
        vocab,
        GameConfig {
            difficulty,
            ..GameConfig::default()
        },
    );
    state.start();
    state
}

fn type_str(state: &mut GameState, s: &str) {
    for c in s.chars() {
        state.handle_key(Keystroke::Char(c));
    }
}

/// Session on a one-unit-tall canvas: each spawn-interval tick lands the
/// active word and immediately spawns its replacement.
fn short_canvas_session(terms: &[&str]) -> GameState {
    let vocab = terms
        .iter()
        .map(|t| entry(t, CodingConvention::None))
        .collect();
    let mut state = GameState::new(
        vocab,
        GameConfig {
            canvas_height: 1.0,
            ..GameConfig::default()
        },
    );
    state.start();
    state
}

#[test]
fn test_exact_typing_removes_word_per_difficulty() {
    for difficulty in [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Coding,
    ] {
        let mut state = session(&["pointer"], difficulty);
        type_str(&mut state, "pointer");
        assert_eq!(state.active_words().len(), 0, "{:?}", difficulty);
        assert_eq!(state.words_typed(), 1, "{:?}", difficulty);
        assert_eq!(state.score(), 70, "{:?}", difficulty);

        let attempts = state.take_attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].term, "pointer");
        assert_eq!(attempts[0].outcome, Outcome::Hit);
    }
}

#[test]
fn test_case_insensitive_below_hard() {
    let mut state = session(&["Pointer"], Difficulty::Easy);
    type_str(&mut state, "pointer");
    assert_eq!(state.words_typed(), 1);

    let mut state = session(&["Pointer"], Difficulty::Hard);
    type_str(&mut state, "pointer");
    assert_eq!(state.words_typed(), 0);
    // The first wrong-case character hard-reset the buffer.
    assert_eq!(state.input_buffer(), "");
    type_str(&mut state, "Pointer");
    assert_eq!(state.words_typed(), 1);
}

#[test]
fn test_five_landings_end_the_session_never_earlier() {
    let mut state = short_canvas_session(&["word"]);
    for expected in 1..MISS_LIMIT {
        state.tick(SPAWN_INTERVAL_MS);
        assert_eq!(state.misses(), expected);
        assert!(!state.game_over(), "ended early at miss {}", expected);
        assert!(state.take_attempts().is_empty());
        // The tick also respawns, so there is a word for the next landing.
        assert!(!state.active_words().is_empty());
    }

    state.tick(SPAWN_INTERVAL_MS);
    assert_eq!(state.misses(), MISS_LIMIT);
    assert!(state.game_over());

    // Exactly one failed attempt, for the word that ended the session.
    let attempts = state.take_attempts();
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].outcome, Outcome::Miss);
    assert_eq!(attempts[0].term, "word");
}

#[test]
fn test_game_over_freezes_the_session() {
    let mut state = short_canvas_session(&["word"]);
    for _ in 0..MISS_LIMIT {
        state.tick(SPAWN_INTERVAL_MS);
    }
    assert!(state.game_over());
    let score = state.score();

    state.tick(10 * TICK_MS);
    type_str(&mut state, "word");
    assert!(state.active_words().is_empty());
    assert_eq!(state.score(), score);
    assert_eq!(state.words_typed(), 0);
}

#[test]
fn test_wave_expiry_clears_without_penalty() {
    // One big tick past the wave boundary; words land well before it on the
    // default canvas, so use a tall one to keep them airborne.
    let mut state = GameState::new(
        vec![entry("word", CodingConvention::None)],
        GameConfig {
            canvas_height: 1_000_000.0,
            ..GameConfig::default()
        },
    );
    state.start();
    let wave_ms = (WAVE_DURATION_S * 1000.0) as u32;
    state.tick(wave_ms + TICK_MS);

    assert_eq!(state.wave(), 2);
    assert_eq!(state.misses(), 0);
    assert!(!state.game_over());
    // In-flight words were discarded; the spawn period has since refilled.
    assert!((state.wave_time_remaining() - WAVE_DURATION_S).abs() < 1e-3);
}

#[test]
fn test_coding_difficulty_enforces_convention() {
    let vocab = vec![entry("fooBar", CodingConvention::CamelCase)];
    let mut state = GameState::new(
        vocab,
        GameConfig {
            difficulty: Difficulty::Coding,
            ..GameConfig::default()
        },
    );
    state.start();

    // Wrong case is a mismatch at the first divergent character.
    type_str(&mut state, "foobar");
    assert_eq!(state.words_typed(), 0);
    assert_eq!(state.input_buffer(), "");

    type_str(&mut state, "fooBar");
    assert_eq!(state.words_typed(), 1);
}

#[test]
fn test_snake_case_term_is_typable() {
    let vocab = vec![entry("foo_bar", CodingConvention::SnakeCase)];
    let mut state = GameState::new(
        vocab,
        GameConfig {
            difficulty: Difficulty::Coding,
            ..GameConfig::default()
        },
    );
    state.start();
    type_str(&mut state, "foo_bar");
    assert_eq!(state.words_typed(), 1);
    assert_eq!(state.score(), 70);
}

#[test]
fn test_difficulty_cycles_mid_session() {
    let mut state = session(&["word"], Difficulty::Easy);
    type_str(&mut state, "wo");
    state.set_difficulty(state.difficulty().cycle());
    assert_eq!(state.difficulty(), Difficulty::Medium);
    assert_eq!(state.input_buffer(), "wo");
    type_str(&mut state, "rd");
    assert_eq!(state.words_typed(), 1);
}

#[test]
fn test_summary_reflects_session() {
    let mut state = session(&["word"], Difficulty::Easy);
    type_str(&mut state, "word");
    state.tick(1000);

    let summary = state.summary();
    assert_eq!(summary.score, 40);
    assert_eq!(summary.wave, 1);
    assert_eq!(summary.words_typed, 1);
    assert!((summary.elapsed_seconds - 1.0).abs() < 1e-3);
    assert!((summary.accuracy - 1.0).abs() < 1e-6);
}

#[test]
fn test_deterministic_given_seed() {
    let run_once = || {
        let vocab = vec![
            entry("alpha", CodingConvention::None),
            entry("beta", CodingConvention::None),
            entry("gamma", CodingConvention::None),
        ];
        let mut state = GameState::new(
            vocab,
            GameConfig {
                seed: 99,
                ..GameConfig::default()
            },
        );
        state.start();
        for _ in 0..600 {
            state.tick(TICK_MS);
        }
        state
            .active_words()
            .iter()
            .map(|w| (w.term.clone(), w.x.to_bits(), w.y.to_bits()))
            .collect::<Vec<_>>()
    };
    assert_eq!(run_once(), run_once());
}

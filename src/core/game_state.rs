//! Game state module - the authoritative falling-word simulation.
//!
//! All event sources (the fixed-timestep tick, the spawn period folded into
//! it, and keystrokes) mutate this one state through two run-to-completion
//! entry points: [`GameState::tick`] and [`GameState::handle_key`]. Within a
//! tick the order is fixed: motion first, then landed-word removal and miss
//! accounting, then the wave countdown/reset, then spawning - so a wave reset
//! always discards the already-advanced word set.

use arrayvec::ArrayVec;

use crate::core::matcher::{is_accepted_char, satisfies_convention, MatchPolicy};
use crate::core::scoring::{session_summary, word_score, words_per_minute};
use crate::core::spawner::WordSpawner;
use crate::types::*;
use crate::vocab::VocabTerm;

/// One term currently falling down the canvas. Created by the spawner,
/// destroyed the instant it is matched or crosses the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingWord {
    pub term: String,
    pub definition: String,
    pub coding_convention: CodingConvention,
    pub x: f32,
    /// Monotonic non-decreasing; the word lands once y > canvas height
    pub y: f32,
    pub speed: f32,
    /// Derived from y each tick; the view decides what it means visually
    pub font_size: f32,
}

/// A single keystroke event as the matcher sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
}

/// Per-session configuration, fixed at construction except for difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub difficulty: Difficulty,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            difficulty: Difficulty::Easy,
            seed: 1,
        }
    }
}

/// Complete session state. Exactly one instance exists per play session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    difficulty: Difficulty,
    spawner: WordSpawner,
    active_words: Vec<FallingWord>,
    input_buffer: String,
    wave: u32,
    wave_time_remaining: f32,
    misses: u32,
    score: u32,
    words_typed: u32,
    correct_keystrokes: u32,
    total_keystrokes: u32,
    elapsed_ms: u64,
    spawn_timer_ms: u32,
    started: bool,
    game_over: bool,
    /// Attempt events queued for the driver (drained via `take_attempts`)
    attempts: ArrayVec<AttemptEvent, 8>,
}

impl GameState {
    pub fn new(vocab: Vec<VocabTerm>, config: GameConfig) -> Self {
        Self {
            config,
            difficulty: config.difficulty,
            spawner: WordSpawner::new(vocab, config.seed),
            active_words: Vec::new(),
            input_buffer: String::new(),
            wave: 1,
            wave_time_remaining: WAVE_DURATION_S,
            misses: 0,
            score: 0,
            words_typed: 0,
            correct_keystrokes: 0,
            total_keystrokes: 0,
            elapsed_ms: 0,
            spawn_timer_ms: 0,
            started: false,
            game_over: false,
            attempts: ArrayVec::new(),
        }
    }

    /// Start the session and spawn the first word immediately.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_word();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn wave_time_remaining(&self) -> f32 {
        self.wave_time_remaining
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn words_typed(&self) -> u32 {
        self.words_typed
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn active_words(&self) -> &[FallingWord] {
        &self.active_words
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch matching/rendering policy mid-session. The current buffer is
    /// kept; only future matching uses the new policy.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn policy(&self) -> MatchPolicy {
        MatchPolicy::for_difficulty(self.difficulty)
    }

    pub fn canvas_width(&self) -> f32 {
        self.config.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.config.canvas_height
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_ms as f32 / 1000.0
    }

    pub fn keystrokes(&self) -> (u32, u32) {
        (self.correct_keystrokes, self.total_keystrokes)
    }

    pub fn words_per_minute(&self) -> f32 {
        words_per_minute(self.words_typed, self.elapsed_seconds())
    }

    /// Drain attempt events queued since the last call.
    pub fn take_attempts(&mut self) -> ArrayVec<AttemptEvent, 8> {
        std::mem::take(&mut self.attempts)
    }

    /// Terminal summary built from the running accumulators.
    pub fn summary(&self) -> SessionSummary {
        session_summary(
            self.score,
            self.wave,
            self.words_typed,
            self.elapsed_seconds(),
            self.correct_keystrokes,
            self.total_keystrokes,
        )
    }

    /// Begin a fresh session over the same vocabulary, keeping the current
    /// difficulty and continuing the RNG sequence.
    pub fn restart(&mut self) {
        let vocab = self.spawner.clone_terms();
        let config = GameConfig {
            seed: self.spawner.seed(),
            difficulty: self.difficulty,
            ..self.config
        };
        *self = Self::new(vocab, config);
        self.start();
    }

    fn spawn_word(&mut self) {
        if self.game_over {
            return;
        }
        if let Some(sw) = self.spawner.next_word(self.config.canvas_width) {
            self.active_words.push(FallingWord {
                term: sw.term,
                definition: sw.definition,
                coding_convention: sw.coding_convention,
                x: sw.x,
                y: 0.0,
                speed: sw.speed,
                font_size: sw.font_size,
            });
        }
    }

    /// Advance the simulation by `elapsed_ms` of wall time.
    ///
    /// A no-op once the session is over; that also stops the spawn period,
    /// which lives inside this function as an accumulator.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over || !self.started {
            return;
        }
        self.elapsed_ms += elapsed_ms as u64;

        // Motion: every word advances, then grows with depth.
        let frames = elapsed_ms as f32 / TICK_MS as f32;
        let canvas_h = self.config.canvas_height;
        for word in &mut self.active_words {
            word.y += word.speed * frames;
            word.font_size = BASE_FONT_SIZE + (word.y / canvas_h) * FONT_GROWTH_FACTOR;
        }

        // Landed words: removed, counted as misses, buffer discarded. Only
        // the word that causes the final miss reports a failed attempt.
        let floor = canvas_h;
        let mut landed_any = false;
        let mut i = 0;
        while i < self.active_words.len() {
            if self.active_words[i].y > floor {
                let word = self.active_words.remove(i);
                landed_any = true;
                if self.misses < MISS_LIMIT {
                    self.misses += 1;
                    if self.misses >= MISS_LIMIT {
                        let _ = self.attempts.try_push(AttemptEvent {
                            term: word.term,
                            outcome: Outcome::Miss,
                            elapsed_ms: self.elapsed_ms,
                        });
                        self.game_over = true;
                    }
                }
            } else {
                i += 1;
            }
        }
        if landed_any {
            self.input_buffer.clear();
        }
        if self.game_over {
            return;
        }

        // Wave countdown. Expiry clears in-flight words without penalty,
        // discarding the set advanced above.
        self.wave_time_remaining -= elapsed_ms as f32 / 1000.0;
        if self.wave_time_remaining <= 0.0 {
            self.wave += 1;
            self.wave_time_remaining = WAVE_DURATION_S;
            self.active_words.clear();
        }

        // Spawn period.
        self.spawn_timer_ms += elapsed_ms;
        while self.spawn_timer_ms >= SPAWN_INTERVAL_MS {
            self.spawn_timer_ms -= SPAWN_INTERVAL_MS;
            self.spawn_word();
        }
    }

    /// Consume one keystroke event.
    pub fn handle_key(&mut self, key: Keystroke) {
        if self.game_over || !self.started {
            return;
        }
        match key {
            Keystroke::Backspace => {
                self.total_keystrokes += 1;
                self.input_buffer.pop();
                // A shrunk buffer can only stop prefixing anything if the
                // word set changed underneath it (wave reset).
                if !self.input_buffer.is_empty() && self.candidate_index().is_none() {
                    self.input_buffer.clear();
                }
            }
            Keystroke::Char(c) => {
                if !is_accepted_char(c) {
                    return;
                }
                self.total_keystrokes += 1;
                self.input_buffer.push(c);

                let Some(idx) = self.candidate_index() else {
                    // A single non-matching keystroke discards the attempt.
                    self.input_buffer.clear();
                    return;
                };
                self.correct_keystrokes += 1;

                let policy = self.policy();
                if !policy.is_complete(&self.input_buffer, &self.active_words[idx].term) {
                    return;
                }
                if policy.enforce_convention
                    && !satisfies_convention(
                        self.active_words[idx].coding_convention,
                        &self.input_buffer,
                    )
                {
                    // Not a mismatch: the buffer stays, the match simply does
                    // not finalize until the convention is satisfied.
                    return;
                }

                let word = self.active_words.remove(idx);
                self.score += word_score(word.term.chars().count());
                self.words_typed += 1;
                self.input_buffer.clear();
                let _ = self.attempts.try_push(AttemptEvent {
                    term: word.term,
                    outcome: Outcome::Hit,
                    elapsed_ms: self.elapsed_ms,
                });
            }
        }
    }

    /// First active word the buffer prefixes under the current policy.
    fn candidate_index(&self) -> Option<usize> {
        let policy = self.policy();
        self.active_words
            .iter()
            .position(|w| policy.matched_len(&self.input_buffer, &w.term) > 0)
    }
}

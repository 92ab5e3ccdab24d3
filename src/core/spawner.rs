//! WordSpawner - picks the next term and places it on the canvas.
//!
//! Entries flagged `preferred` sort before the rest; the draw is then uniform
//! over the whole ordering. No de-duplication against active words: the same
//! term may fall twice concurrently.

use crate::core::rng::SimpleRng;
use crate::types::{BASE_FALL_SPEED, BASE_FONT_SIZE, GLYPH_ASPECT};
use crate::vocab::VocabTerm;

/// Spawn parameters for one new falling word.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedWord {
    pub term: String,
    pub definition: String,
    pub coding_convention: crate::types::CodingConvention,
    pub x: f32,
    pub speed: f32,
    pub font_size: f32,
}

/// Selects terms and spawn positions. Owns its RNG so a seeded session
/// produces the same word sequence every run.
#[derive(Debug, Clone)]
pub struct WordSpawner {
    /// Vocabulary in preferred-first order
    terms: Vec<VocabTerm>,
    rng: SimpleRng,
}

impl WordSpawner {
    /// Build a spawner over the session's vocabulary.
    ///
    /// An empty vocabulary is allowed here; `next_word` then never produces
    /// anything and the session idles (the loader is expected to reject empty
    /// sets before a real session starts).
    pub fn new(mut terms: Vec<VocabTerm>, seed: u32) -> Self {
        // Stable: preserves source order within the preferred/other groups.
        terms.sort_by_key(|t| !t.preferred);
        Self {
            terms,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Pick the next term and a horizontal position such that the rendered
    /// term fits on the canvas at its spawn size.
    pub fn next_word(&mut self, canvas_width: f32) -> Option<SpawnedWord> {
        if self.terms.is_empty() {
            return None;
        }
        let idx = self.rng.next_range(self.terms.len() as u32) as usize;
        let entry = &self.terms[idx];

        let text_width = entry.term.chars().count() as f32 * BASE_FONT_SIZE * GLYPH_ASPECT;
        let max_x = (canvas_width - text_width).max(0.0);
        let x = self.rng.next_f32() * max_x;

        Some(SpawnedWord {
            term: entry.term.clone(),
            definition: entry.definition.clone(),
            coding_convention: entry.coding_convention,
            x,
            speed: BASE_FALL_SPEED,
            font_size: BASE_FONT_SIZE,
        })
    }

    /// RNG state, used to reseed a restarted session.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Copy of the session vocabulary (already preferred-first ordered).
    pub fn clone_terms(&self) -> Vec<VocabTerm> {
        self.terms.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CodingConvention;

    fn entry(term: &str, preferred: bool) -> VocabTerm {
        VocabTerm {
            term: term.to_string(),
            definition: format!("definition of {}", term),
            strand: "test".to_string(),
            preferred,
            case_sensitive: false,
            coding_convention: CodingConvention::None,
        }
    }

    #[test]
    fn test_preferred_terms_sort_first() {
        let spawner = WordSpawner::new(
            vec![entry("late", false), entry("star", true), entry("tail", false)],
            1,
        );
        assert_eq!(spawner.terms[0].term, "star");
        assert!(spawner.terms[1..].iter().all(|t| !t.preferred));
    }

    #[test]
    fn test_spawn_x_within_canvas() {
        let mut spawner = WordSpawner::new(vec![entry("borrow", false)], 7);
        let text_width = 6.0 * BASE_FONT_SIZE * GLYPH_ASPECT;
        for _ in 0..200 {
            let w = spawner.next_word(600.0).unwrap();
            assert!(w.x >= 0.0);
            assert!(w.x <= 600.0 - text_width + f32::EPSILON);
        }
    }

    #[test]
    fn test_long_term_clamps_to_left_edge() {
        let long = "a".repeat(100);
        let mut spawner = WordSpawner::new(vec![entry(&long, false)], 3);
        let w = spawner.next_word(600.0).unwrap();
        assert_eq!(w.x, 0.0);
    }

    #[test]
    fn test_empty_vocab_spawns_nothing() {
        let mut spawner = WordSpawner::new(Vec::new(), 1);
        assert!(spawner.is_empty());
        assert_eq!(spawner.next_word(600.0), None);
    }

    #[test]
    fn test_deterministic_sequence() {
        let vocab = vec![entry("one", false), entry("two", false), entry("three", true)];
        let mut a = WordSpawner::new(vocab.clone(), 42);
        let mut b = WordSpawner::new(vocab, 42);
        for _ in 0..50 {
            assert_eq!(a.next_word(600.0), b.next_word(600.0));
        }
    }

    #[test]
    fn test_initial_speed_and_font() {
        let mut spawner = WordSpawner::new(vec![entry("x", false)], 1);
        let w = spawner.next_word(600.0).unwrap();
        assert_eq!(w.speed, BASE_FALL_SPEED);
        assert_eq!(w.font_size, BASE_FONT_SIZE);
    }
}

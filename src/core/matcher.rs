//! Input matching policies - one per difficulty.
//!
//! Each difficulty supplies a casing rule, a reveal mode for rendering, and
//! (for coding) a post-completion convention validator. Collecting these in
//! one policy value keeps `if difficulty == ...` branches out of the matcher
//! and the view.

use crate::types::{CodingConvention, Difficulty};

/// How much of a falling term the view may reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// First character shown, rest as placeholders
    FirstChar,
    /// Full term shown while the word is still near the top
    FlashNearTop,
    /// Placeholders only
    Hidden,
}

/// Matching/rendering rules derived from the active difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    pub case_sensitive: bool,
    pub reveal: Reveal,
    /// Whether a term's coding convention gates completion
    pub enforce_convention: bool,
}

impl MatchPolicy {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                case_sensitive: false,
                reveal: Reveal::FirstChar,
                enforce_convention: false,
            },
            Difficulty::Medium => Self {
                case_sensitive: false,
                reveal: Reveal::FlashNearTop,
                enforce_convention: false,
            },
            Difficulty::Hard => Self {
                case_sensitive: true,
                reveal: Reveal::Hidden,
                enforce_convention: false,
            },
            Difficulty::Coding => Self {
                case_sensitive: true,
                reveal: Reveal::Hidden,
                enforce_convention: true,
            },
        }
    }

    /// Apply the casing rule to a buffer or term before comparison.
    pub fn fold_case(&self, s: &str) -> String {
        if self.case_sensitive {
            s.to_string()
        } else {
            s.to_lowercase()
        }
    }

    /// Number of buffer characters that match a prefix of `term`, or 0.
    ///
    /// The buffer either prefixes the whole term (length returned) or counts
    /// for nothing; partial credit does not exist in this game.
    pub fn matched_len(&self, buffer: &str, term: &str) -> usize {
        if buffer.is_empty() {
            return 0;
        }
        if self.fold_case(term).starts_with(&self.fold_case(buffer)) {
            buffer.chars().count()
        } else {
            0
        }
    }

    /// Whether the buffer equals the full term under the casing rule.
    pub fn is_complete(&self, buffer: &str, term: &str) -> bool {
        self.fold_case(buffer) == self.fold_case(term)
    }
}

/// Characters the matcher consumes; everything else is a no-op keystroke.
///
/// The underscore is included so snake_case terms are typable under coding
/// difficulty.
pub fn is_accepted_char(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a'..='z' | '0'..='9' | '-' | '\'' | '_')
}

/// Check an input against a convention's lexical shape.
///
/// camelCase: lowercase run, then zero or more capitalized segments.
/// snake_case: lowercase runs joined by single underscores.
pub fn satisfies_convention(convention: CodingConvention, input: &str) -> bool {
    match convention {
        CodingConvention::None => true,
        CodingConvention::CamelCase => is_camel_case(input),
        CodingConvention::SnakeCase => is_snake_case(input),
    }
}

fn is_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    let mut prev_upper = false;
    for c in chars {
        if c.is_ascii_lowercase() {
            prev_upper = false;
        } else if c.is_ascii_uppercase() {
            // A capital may not follow another capital: segments are
            // [A-Z][a-z]*, so "fooBBar" is out.
            if prev_upper {
                return false;
            }
            prev_upper = true;
        } else {
            return false;
        }
    }
    true
}

fn is_snake_case(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    for segment in s.split('_') {
        if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_lowercase()) {
            return false;
        }
    }
    true
}

//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Simulation canvas dimensions (virtual units, not terminal cells)
pub const DEFAULT_CANVAS_WIDTH: f32 = 600.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 400.0;

/// Game timing constants (in milliseconds unless noted)
pub const TICK_MS: u32 = 16;
pub const SPAWN_INTERVAL_MS: u32 = 3000;
pub const WAVE_DURATION_S: f32 = 30.0;

/// Words that reach the floor before this many misses end the session
pub const MISS_LIMIT: u32 = 5;

/// Falling-word physics / typography
pub const BASE_FALL_SPEED: f32 = 0.3;
pub const BASE_FONT_SIZE: f32 = 20.0;
pub const FONT_GROWTH_FACTOR: f32 = 4.0;
/// Approximate glyph width as a fraction of font size (for spawn bounds)
pub const GLYPH_ASPECT: f32 = 0.6;

/// Points awarded per character of a completed term
pub const SCORE_PER_CHAR: u32 = 10;

/// Definitions longer than this are truncated with an ellipsis
pub const DEFINITION_PREVIEW_LEN: usize = 50;

/// Medium difficulty shows the full term while the word is above this y
pub const MEDIUM_FLASH_Y: f32 = 50.0;

/// Matching/rendering policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// First letter revealed, case-insensitive matching
    Easy,
    /// Full term flashed near the top, then hidden; case-insensitive
    Medium,
    /// Never revealed, exact-case matching
    Hard,
    /// Exact-case matching plus coding-convention validation on completion
    Coding,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "coding" => Some(Difficulty::Coding),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Coding => "coding",
        }
    }

    /// Next difficulty in the cycle (for the in-game toggle key)
    pub fn cycle(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Coding,
            Difficulty::Coding => Difficulty::Easy,
        }
    }
}

/// Lexical shape a completed input must satisfy under coding difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodingConvention {
    #[default]
    None,
    CamelCase,
    SnakeCase,
}

impl CodingConvention {
    /// Parse convention from the vocabulary-set column value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "" | "none" => Some(CodingConvention::None),
            "camelCase" => Some(CodingConvention::CamelCase),
            "snake_case" => Some(CodingConvention::SnakeCase),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodingConvention::None => "none",
            CodingConvention::CamelCase => "camelCase",
            CodingConvention::SnakeCase => "snake_case",
        }
    }
}

/// Resolved outcome of one attempt at a single term instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// Value emitted across the progress boundary, one per resolved attempt
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptEvent {
    pub term: String,
    pub outcome: Outcome,
    /// Milliseconds since session start
    pub elapsed_ms: u64,
}

/// Terminal summary handed to a report-rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    pub wave: u32,
    pub words_typed: u32,
    pub elapsed_seconds: f32,
    /// Fraction in 0..=1; 1.0 when no keystrokes were recorded
    pub accuracy: f32,
}

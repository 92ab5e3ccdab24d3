//! Vocabulary-set loading and validation.
//!
//! Sets are CSV files with the header
//! `term,definition,strand,preferred,caseSensitive,codingConvention`.
//! Rows whose term or definition is blank after trimming are dropped; a set
//! with zero usable rows is rejected before the simulation ever starts.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::types::CodingConvention;

/// One normalized vocabulary entry, immutable for the session's duration.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabTerm {
    pub term: String,
    pub definition: String,
    pub strand: String,
    pub preferred: bool,
    /// Carried from the source data; matching is governed by difficulty.
    pub case_sensitive: bool,
    pub coding_convention: CodingConvention,
}

/// Load a vocabulary set from a CSV file.
pub fn load_vocab_file(path: &Path) -> Result<Vec<VocabTerm>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read vocabulary set {}", path.display()))?;
    parse_vocab_csv(&data)
        .with_context(|| format!("failed to parse vocabulary set {}", path.display()))
}

/// Parse CSV text into usable vocabulary entries.
///
/// The first line is a header and is skipped. Fields may be double-quoted
/// (definitions commonly contain commas); `""` inside a quoted field is an
/// escaped quote.
pub fn parse_vocab_csv(data: &str) -> Result<Vec<VocabTerm>> {
    let mut terms = Vec::new();

    for (lineno, line) in data.lines().enumerate() {
        if lineno == 0 || line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("").trim();

        let term = field(0);
        let definition = field(1);
        if term.is_empty() || definition.is_empty() {
            continue;
        }

        let convention = field(5);
        let coding_convention = CodingConvention::from_str(convention).with_context(|| {
            format!("line {}: unknown codingConvention {:?}", lineno + 1, convention)
        })?;

        terms.push(VocabTerm {
            term: term.to_string(),
            definition: definition.to_string(),
            strand: if field(2).is_empty() {
                "N/A".to_string()
            } else {
                field(2).to_string()
            },
            preferred: field(3) == "true",
            case_sensitive: field(4) == "true",
            coding_convention,
        });
    }

    if terms.is_empty() {
        bail!("vocabulary set contains no usable entries");
    }
    Ok(terms)
}

/// Split a single CSV line into fields, honoring double quotes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

//! Multiple-choice quiz generation.
//!
//! Stateless companion to the typing game: one call produces a full question
//! set from the vocabulary, with no timing component. Each question asks for
//! either a term's definition or a definition's term, with three distractors
//! drawn from the rest of the set.

use crate::core::rng::SimpleRng;
use crate::vocab::VocabTerm;

/// Which direction questions are asked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    TermToDefinition,
    DefinitionToTerm,
    /// Each question picks a direction at random
    Mixed,
}

impl QuizMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "term" | "termtodefinition" => Some(QuizMode::TermToDefinition),
            "definition" | "definitiontoterm" => Some(QuizMode::DefinitionToTerm),
            "mixed" => Some(QuizMode::Mixed),
            _ => None,
        }
    }
}

/// The concrete direction of one generated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    TermToDefinition,
    DefinitionToTerm,
}

/// One generated multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub kind: QuestionKind,
    pub prompt: String,
    pub correct: String,
    /// Shuffled options, always containing `correct`
    pub options: Vec<String>,
    pub term: String,
}

/// Generate one question per vocabulary entry, preferred entries first.
///
/// Distractors are distinct values from other entries; with a very small set
/// a question may carry fewer than four options.
pub fn generate_questions(
    vocab: &[VocabTerm],
    mode: QuizMode,
    rng: &mut SimpleRng,
) -> Vec<QuizQuestion> {
    let mut questions: Vec<QuizQuestion> = vocab
        .iter()
        .map(|entry| {
            let kind = match mode {
                QuizMode::TermToDefinition => QuestionKind::TermToDefinition,
                QuizMode::DefinitionToTerm => QuestionKind::DefinitionToTerm,
                QuizMode::Mixed => {
                    if rng.next_range(2) == 0 {
                        QuestionKind::TermToDefinition
                    } else {
                        QuestionKind::DefinitionToTerm
                    }
                }
            };
            build_question(vocab, entry, kind, rng)
        })
        .collect();

    // Preferred-first ordering, with a shuffle inside each group.
    rng.shuffle(&mut questions);
    let preferred: Vec<bool> = questions
        .iter()
        .map(|q| {
            vocab
                .iter()
                .find(|t| t.term == q.term)
                .map(|t| t.preferred)
                .unwrap_or(false)
        })
        .collect();
    let mut ordered: Vec<QuizQuestion> = Vec::with_capacity(questions.len());
    for (q, pref) in questions.iter().zip(&preferred) {
        if *pref {
            ordered.push(q.clone());
        }
    }
    for (q, pref) in questions.iter().zip(&preferred) {
        if !*pref {
            ordered.push(q.clone());
        }
    }
    ordered
}

fn build_question(
    vocab: &[VocabTerm],
    entry: &VocabTerm,
    kind: QuestionKind,
    rng: &mut SimpleRng,
) -> QuizQuestion {
    let (prompt, correct) = match kind {
        QuestionKind::TermToDefinition => (entry.term.clone(), entry.definition.clone()),
        QuestionKind::DefinitionToTerm => (entry.definition.clone(), entry.term.clone()),
    };

    // Candidate distractors: distinct values from other entries.
    let mut pool: Vec<String> = vocab
        .iter()
        .map(|t| match kind {
            QuestionKind::TermToDefinition => t.definition.clone(),
            QuestionKind::DefinitionToTerm => t.term.clone(),
        })
        .filter(|v| *v != correct)
        .collect();
    pool.sort();
    pool.dedup();
    rng.shuffle(&mut pool);
    pool.truncate(3);

    let mut options = pool;
    options.push(correct.clone());
    rng.shuffle(&mut options);

    QuizQuestion {
        kind,
        prompt,
        correct,
        options,
        term: entry.term.clone(),
    }
}

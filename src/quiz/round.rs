//! Bookkeeping for one interactive quiz round

use super::request::{Batch, Submission};
use crate::wordlist::WordRecord;

/// Check a typed translation against the expected one
///
/// Surrounding whitespace and letter case are ignored.
pub fn answer_matches(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}

/// Answers collected while working through a batch
#[derive(Debug)]
pub struct Round {
    category: String,
    filename: String,
    words: Vec<WordRecord>,
    asked: Vec<String>,
    correct: usize,
}

impl Round {
    /// Start a round over a selected batch
    pub fn new(category: impl Into<String>, filename: impl Into<String>, batch: Batch) -> Self {
        Self {
            category: category.into(),
            filename: filename.into(),
            words: batch.words,
            asked: Vec::new(),
            correct: 0,
        }
    }

    /// The word to ask next, if any remain
    pub fn current(&self) -> Option<&WordRecord> {
        self.words.get(self.asked.len())
    }

    /// Record the answer to the current word; returns whether it was right
    pub fn answer(&mut self, given: &str) -> Option<bool> {
        let record = self.current()?;
        let right = answer_matches(&record.translation, given);
        let word = record.word.clone();
        self.asked.push(word);
        if right {
            self.correct += 1;
        }
        Some(right)
    }

    /// Number of words answered so far
    pub fn answered(&self) -> usize {
        self.asked.len()
    }

    /// Number of right answers so far
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Every answered word counts as practice, right or wrong
    pub fn into_submission(self) -> Submission {
        Submission { category: self.category, filename: self.filename, results: self.asked }
    }
}

//! Quiz requests and their outcomes

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::progress::WordWeights;
use crate::wordlist::{WordRecord, validate_name};

/// Batch size used when a request gives none (or a non-positive one)
pub const DEFAULT_LIMIT: usize = 10;

/// Turn a requested batch size into a usable one
pub fn normalize_limit(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(default),
        _ => default,
    }
}

/// Ask for the next words of a wordlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Wordlist category
    pub category: String,
    /// Wordlist file name
    pub filename: String,
    /// Requested batch size
    pub limit: Option<i64>,
    /// Word shown last, kept out of the first slot
    pub exclude: Option<String>,
}

impl SelectionRequest {
    /// Create a request with the default limit and no exclusion
    pub fn new(category: impl Into<String>, filename: impl Into<String>) -> Self {
        Self { category: category.into(), filename: filename.into(), ..Default::default() }
    }

    /// Set the requested batch size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Keep `word` out of the first slot
    pub fn excluding(mut self, word: impl Into<String>) -> Self {
        self.exclude = Some(word.into());
        self
    }
}

/// Words chosen for one quiz round
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Batch {
    /// Selected words, in draw order
    pub words: Vec<WordRecord>,
    /// Batch size that was asked for
    #[serde(skip)]
    pub requested: usize,
}

impl Batch {
    /// Whether the wordlist ran out of distinct words before the batch filled
    pub fn is_exhausted(&self) -> bool {
        self.words.len() < self.requested
    }
}

/// Words practiced in one quiz round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Wordlist category
    pub category: String,
    /// Wordlist file name
    pub filename: String,
    /// Practiced words, in order; repeats count once per occurrence
    #[serde(default)]
    pub results: Vec<String>,
}

impl Submission {
    /// Create a submission
    pub fn new<I, S>(category: impl Into<String>, filename: impl Into<String>, results: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            filename: filename.into(),
            results: results.into_iter().map(Into::into).collect(),
        }
    }

    /// Decode a submission payload
    pub fn from_json(payload: &str) -> Result<Self> {
        let submission: Self = serde_json::from_str(payload)
            .map_err(|e| QuizError::InvalidInput(format!("Malformed submission: {}", e)))?;
        submission.validate()?;
        Ok(submission)
    }

    /// Check that both names are present and plain
    pub fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(QuizError::InvalidInput("Submission is missing a category".into()));
        }
        if self.filename.trim().is_empty() {
            return Err(QuizError::InvalidInput("Submission is missing a filename".into()));
        }
        validate_name("category", &self.category)?;
        validate_name("filename", &self.filename)
    }
}

/// Result of applying a submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionOutcome {
    /// Confirmation text
    pub message: String,
    /// Updated weights of the submitted wordlist
    pub progress: WordWeights,
}

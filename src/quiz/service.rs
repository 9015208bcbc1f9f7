//! Quiz service: selection, submission and progress management
//!
//! Every operation loads the weight tree fresh from the store. Mutating
//! operations hold the document lock across their load, mutate and save
//! steps, so concurrent submissions through one service never overwrite
//! each other.

use std::sync::Mutex;

use rand::Rng;

use super::request::{Batch, SelectionRequest, Submission, SubmissionOutcome, normalize_limit};
use crate::error::{QuizError, Result};
use crate::progress::{ProgressStore, WeightTree, WordWeights};
use crate::selection::select_batch;
use crate::wordlist::{WordRecord, WordlistProvider, validate_name};

/// Adaptive quiz over a progress store and a wordlist provider
pub struct QuizService<S, W> {
    store: S,
    wordlists: W,
    default_limit: usize,
    document_lock: Mutex<()>,
}

impl<S: ProgressStore, W: WordlistProvider> QuizService<S, W> {
    /// Create a service
    pub fn new(store: S, wordlists: W, default_limit: usize) -> Self {
        Self { store, wordlists, default_limit, document_lock: Mutex::new(()) }
    }

    /// The progress store backing this service
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The wordlist provider backing this service
    pub fn wordlists(&self) -> &W {
        &self.wordlists
    }

    /// Load the words of a wordlist, failing if it has none
    pub fn wordlist(&self, category: &str, filename: &str) -> Result<Vec<WordRecord>> {
        let words = self.wordlists.load(category, filename)?;
        if words.is_empty() {
            return Err(QuizError::Empty {
                category: category.to_string(),
                filename: filename.to_string(),
            });
        }
        Ok(words)
    }

    /// Choose the next batch of words, favouring the least practiced
    pub fn select<R>(&self, request: &SelectionRequest, rng: &mut R) -> Result<Batch>
    where
        R: Rng,
    {
        let words = self.wordlist(&request.category, &request.filename)?;
        let limit = normalize_limit(request.limit, self.default_limit);

        let tree = self.store.load()?;
        let empty = WordWeights::new();
        let weights = tree.words(&request.category, &request.filename).unwrap_or(&empty);

        let picked = select_batch(&words, weights, request.exclude.as_deref(), limit, rng);
        if picked.is_empty() {
            return Err(QuizError::Empty {
                category: request.category.clone(),
                filename: request.filename.clone(),
            });
        }

        let batch = Batch { words: picked.into_iter().cloned().collect(), requested: limit };
        tracing::debug!(
            "Selected {} of {} requested words from {}/{}",
            batch.words.len(),
            limit,
            request.category,
            request.filename
        );
        Ok(batch)
    }

    /// Record practice of the submitted words and persist the new weights
    pub fn submit(&self, submission: &Submission) -> Result<SubmissionOutcome> {
        submission.validate()?;

        let progress = self.update(|tree| {
            tree.apply_practice(&submission.category, &submission.filename, &submission.results)
                .clone()
        })?;

        tracing::info!(
            "Recorded {} practiced words for {}/{}",
            submission.results.len(),
            submission.category,
            submission.filename
        );
        Ok(SubmissionOutcome { message: "Quiz results submitted".to_string(), progress })
    }

    /// Forget all progress of a wordlist
    pub fn delete_progress(&self, category: &str, filename: &str) -> Result<()> {
        validate_name("category", category)?;
        validate_name("filename", filename)?;

        let _guard = self.document_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut tree = self.store.load()?;
        if !tree.has_category(category) {
            return Err(QuizError::NotFound(format!("Progress category {}", category)));
        }
        if !tree.delete_subtree(category, filename) {
            return Err(QuizError::NotFound(format!("Progress for {}/{}", category, filename)));
        }
        self.store.save(&tree)?;

        tracing::info!("Deleted progress for {}/{}", category, filename);
        Ok(())
    }

    /// The whole weight tree
    pub fn progress(&self) -> Result<WeightTree> {
        self.store.load()
    }

    /// Run one load, mutate and save cycle under the document lock
    fn update<T>(&self, mutate: impl FnOnce(&mut WeightTree) -> T) -> Result<T> {
        // The guarded data is (), so a poisoned lock carries no broken state
        let _guard = self.document_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut tree = self.store.load()?;
        let value = mutate(&mut tree);
        self.store.save(&tree)?;
        Ok(value)
    }
}

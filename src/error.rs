//! Error types for quiz selection and progress tracking

use thiserror::Error;

/// Errors surfaced by the quiz service and its collaborators
#[derive(Debug, Error)]
pub enum QuizError {
    /// Referenced wordlist or progress entry does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Wordlist exists but has no words to offer
    #[error("Wordlist {category}/{filename} has no words")]
    Empty {
        /// Wordlist category
        category: String,
        /// Wordlist file name (without extension)
        filename: String,
    },

    /// Malformed request payload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Progress or wordlist storage could not be read or written
    #[error("Storage unavailable: {context}")]
    StorageUnavailable {
        /// What was being attempted
        context: String,
        /// Underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl QuizError {
    /// Build a storage failure from any underlying error
    pub fn storage(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        QuizError::StorageUnavailable { context: context.into(), source: source.into() }
    }

    /// Check if this error is a fault on our side rather than the caller's
    pub fn is_server_fault(&self) -> bool {
        matches!(self, QuizError::StorageUnavailable { .. })
    }
}

/// Result alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

//! Error types for dictionary lookups

use thiserror::Error;

/// Errors that can occur when looking up a word
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// No word was given
    #[error("No word to look up")]
    EmptyWord,

    /// The dictionary service could not be reached
    #[error("Network unreachable, please check your internet connection")]
    NetworkUnreachable,

    /// The dictionary has no entry for the word
    #[error("No definition found for {0:?}")]
    NotFound(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Configured endpoint cannot take a word as a path segment
    #[error("Invalid dictionary URL {0:?}")]
    InvalidUrl(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DictionaryError {
    /// Check if this error is worth retrying later
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DictionaryError::NetworkUnreachable
                | DictionaryError::RequestError(_)
                | DictionaryError::ApiError { status: 429 | 500..=599, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_failures_are_recoverable() {
        assert!(DictionaryError::NetworkUnreachable.is_recoverable());
        assert!(DictionaryError::ApiError { status: 503, message: String::new() }.is_recoverable());
        assert!(DictionaryError::ApiError { status: 429, message: String::new() }.is_recoverable());
    }

    #[test]
    fn lookup_misses_are_not_recoverable() {
        assert!(!DictionaryError::NotFound("qwzx".into()).is_recoverable());
        assert!(!DictionaryError::EmptyWord.is_recoverable());
        let bad_request = DictionaryError::ApiError { status: 400, message: String::new() };
        assert!(!bad_request.is_recoverable());
    }
}

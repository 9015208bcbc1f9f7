//! Vocabulary wordlists
//!
//! Wordlists are grouped by category and read from plain text files.

pub mod model;
pub mod provider;

// Re-exports
pub use model::WordRecord;
pub use provider::{DirectoryWordlists, WordlistProvider, parse_wordlist, validate_name};

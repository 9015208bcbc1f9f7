//! Dictionary lookups for quiz words
//!
//! Definitions come from the free dictionary API and are kept in a bounded
//! cache so repeated lookups of the same word stay local.

pub mod cache;
pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use cache::{CachedDictionary, DefinitionSource};
pub use client::DictionaryClient;
pub use error::DictionaryError;
pub use models::{DictionaryEntry, Sense};

//! Wordlist data model

use serde::{Deserialize, Serialize};

/// One vocabulary entry of a wordlist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRecord {
    /// The word being learned (unique within its list)
    pub word: String,

    /// Its translation
    pub translation: String,

    /// Part of speech or other grouping label
    #[serde(rename = "type")]
    pub kind: String,
}

impl WordRecord {
    /// Create a new record
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self { word: word.into(), translation: translation.into(), kind: kind.into() }
    }
}

//! Wordlist loading from a directory of text files
//!
//! Wordlists live at `<root>/<category>/<filename>.txt`, one entry per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! apple, 蘋果, n.
//! abandon, 放棄, v.
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::model::WordRecord;
use crate::error::{QuizError, Result};

/// Extension of wordlist files
const WORDLIST_EXTENSION: &str = "txt";

/// Source of wordlists
pub trait WordlistProvider: Send + Sync {
    /// Load the words of one wordlist, in file order
    fn load(&self, category: &str, filename: &str) -> Result<Vec<WordRecord>>;

    /// List every category with its wordlist names
    fn catalog(&self) -> Result<BTreeMap<String, Vec<String>>>;
}

/// Wordlists read from a directory tree
#[derive(Debug, Clone)]
pub struct DirectoryWordlists {
    root: PathBuf,
}

impl DirectoryWordlists {
    /// Create a provider rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of a wordlist file
    fn wordlist_path(&self, category: &str, filename: &str) -> Result<PathBuf> {
        validate_name("category", category)?;
        validate_name("filename", filename)?;
        Ok(self.root.join(category).join(format!("{}.{}", filename, WORDLIST_EXTENSION)))
    }
}

impl WordlistProvider for DirectoryWordlists {
    fn load(&self, category: &str, filename: &str) -> Result<Vec<WordRecord>> {
        let path = self.wordlist_path(category, filename)?;
        if !path.is_file() {
            return Err(QuizError::NotFound(format!("Wordlist {}/{}", category, filename)));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            QuizError::storage(format!("Failed to read wordlist {:?}", path), e)
        })?;
        let words = parse_wordlist(&contents);
        tracing::debug!("Loaded {} words from {:?}", words.len(), path);
        Ok(words)
    }

    fn catalog(&self) -> Result<BTreeMap<String, Vec<String>>> {
        if !self.root.is_dir() {
            return Err(QuizError::NotFound(format!("Wordlist directory {:?}", self.root)));
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            QuizError::storage(format!("Failed to read wordlist directory {:?}", self.root), e)
        })?;

        let mut catalog = BTreeMap::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(category) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            // Unreadable categories are skipped rather than failing the listing
            let Ok(files) = fs::read_dir(&path) else {
                tracing::warn!("Skipping unreadable category {:?}", path);
                continue;
            };

            let mut names: Vec<String> = files
                .flatten()
                .map(|f| f.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == WORDLIST_EXTENSION))
                .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
                .collect();
            names.sort();
            catalog.insert(category.to_string(), names);
        }

        Ok(catalog)
    }
}

/// Parse wordlist text into records
///
/// Lines with fewer than three comma-separated fields are skipped.
pub fn parse_wordlist(contents: &str) -> Vec<WordRecord> {
    let mut words = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            tracing::warn!("Skipping malformed wordlist line {}: {}", line_no + 1, line);
            continue;
        }

        words.push(WordRecord::new(parts[0], parts[1], parts[2]));
    }

    words
}

/// Reject names that are empty or could act as a path
pub fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(QuizError::InvalidInput(format!("{} must not be empty", field)));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(QuizError::InvalidInput(format!("{} {:?} is not a plain name", field, name)));
    }
    Ok(())
}

//! Progress persistence
//!
//! The weight tree is always loaded and saved as one whole document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tempfile::NamedTempFile;

use super::tree::WeightTree;
use crate::error::{QuizError, Result};

/// A place the weight tree document can be loaded from and saved to
pub trait ProgressStore: Send + Sync {
    /// Load the persisted tree, or an empty tree if nothing was saved yet
    fn load(&self) -> Result<WeightTree>;

    /// Overwrite the persisted document with `tree`
    fn save(&self, tree: &WeightTree) -> Result<()>;
}

/// Parse a progress document, rejecting weights practice cannot produce
fn decode(contents: &str, origin: &str) -> Result<WeightTree> {
    let tree: WeightTree = serde_json::from_str(contents)
        .map_err(|e| QuizError::storage(format!("Failed to parse progress in {}", origin), e))?;

    if let Some((category, filename, word, weight)) = tree.invalid_entry() {
        return Err(QuizError::storage(
            format!("Corrupt progress in {}", origin),
            format!("weight {} of {}/{}/{} is out of range", weight, category, filename, word),
        ));
    }
    Ok(tree)
}

/// Weight tree stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<WeightTree> {
        if !self.path.exists() {
            tracing::debug!("No progress at {:?}, starting fresh", self.path);
            return Ok(WeightTree::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            QuizError::storage(format!("Failed to read progress from {:?}", self.path), e)
        })?;
        decode(&contents, &format!("{:?}", self.path))
    }

    fn save(&self, tree: &WeightTree) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| {
            QuizError::storage(format!("Failed to create data directory {:?}", parent), e)
        })?;

        let contents = serde_json::to_string_pretty(tree)
            .map_err(|e| QuizError::storage("Failed to serialize progress", e))?;

        // Write beside the target and rename so readers never see a partial file
        let write_err = |e: std::io::Error| {
            QuizError::storage(format!("Failed to write progress to {:?}", self.path), e)
        };
        let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
        temp_file.write_all(contents.as_bytes()).map_err(write_err)?;
        temp_file.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::debug!("Saved progress to {:?}", self.path);
        Ok(())
    }
}

/// In-process weight tree document
///
/// Holds the serialized document so loads and saves go through the same
/// encoding as the file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw persisted document, if anything was saved
    pub fn document(&self) -> Option<String> {
        self.document.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<WeightTree> {
        let document = self.document.lock().unwrap_or_else(|e| e.into_inner());
        match document.as_deref() {
            Some(contents) => decode(contents, "memory"),
            None => Ok(WeightTree::default()),
        }
    }

    fn save(&self, tree: &WeightTree) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(QuizError::storage(
                "Failed to write in-memory progress",
                std::io::Error::other("writes disabled"),
            ));
        }

        let contents = serde_json::to_string(tree)
            .map_err(|e| QuizError::storage("Failed to serialize progress", e))?;
        *self.document.lock().unwrap_or_else(|e| e.into_inner()) = Some(contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_tree() -> WeightTree {
        let mut tree = WeightTree::new();
        tree.apply_practice("toeic", "day1", ["apple", "banana", "apple"]);
        tree.apply_practice("gre", "list3", ["abate"]);
        tree
    }

    #[test]
    fn missing_file_loads_empty_tree() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("progress.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_returns_same_tree() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("nested/progress.json"));
        let tree = sample_tree();

        store.save(&tree).unwrap();
        assert_eq!(store.load().unwrap(), tree);
    }

    #[test]
    fn load_save_cycle_does_not_drift() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("progress.json"));
        store.save(&sample_tree()).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        for _ in 0..3 {
            store.save(&store.load().unwrap()).unwrap();
        }

        assert_eq!(fs::read_to_string(store.path()).unwrap(), first);
    }

    #[test]
    fn corrupt_document_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(err.is_server_fault());
    }

    #[test]
    fn out_of_range_weights_are_storage_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");

        for document in [
            r#"{"toeic":{"day1":{"a":1e308,"b":1e308}}}"#,
            r#"{"toeic":{"day1":{"a":1.0,"b":1e300}}}"#,
            r#"{"toeic":{"day1":{"a":10.5}}}"#,
        ] {
            fs::write(&path, document).unwrap();
            let err = JsonFileStore::new(&path).load().unwrap_err();
            assert!(matches!(err, QuizError::StorageUnavailable { .. }), "accepted {}", document);
        }
    }

    #[test]
    fn hand_written_weights_within_range_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("progress.json");
        fs::write(&path, r#"{"toeic":{"day1":{"a":10.0,"b":0.5}}}"#).unwrap();

        let tree = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(tree.weight("toeic", "day1", "b"), Some(0.5));
    }

    #[test]
    fn unwritable_location_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let store = JsonFileStore::new(blocker.join("progress.json"));
        let err = store.save(&sample_tree()).unwrap_err();
        assert!(matches!(err, QuizError::StorageUnavailable { .. }));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        store.save(&sample_tree()).unwrap();
        assert_eq!(store.load().unwrap(), sample_tree());
    }

    #[test]
    fn memory_store_can_refuse_writes() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        assert!(store.save(&sample_tree()).unwrap_err().is_server_fault());
        assert!(store.document().is_none());

        store.set_fail_writes(false);
        assert!(store.save(&sample_tree()).is_ok());
    }
}

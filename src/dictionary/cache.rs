//! Bounded cache in front of a definition source
//!
//! TinyLFU admission with a fixed entry capacity and a 24 hour TTL, so the
//! cache cannot grow without limit over a long session.

use std::future::Future;
use std::time::Duration;

use moka::sync::Cache;

use super::error::DictionaryError;
use super::models::DictionaryEntry;

/// Anything that can produce a dictionary entry for a word
pub trait DefinitionSource: Send + Sync {
    /// Fetch the entry for `word`
    fn fetch(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<DictionaryEntry, DictionaryError>> + Send;
}

/// Definition source with a bounded in-memory cache
///
/// Entries live only as long as the value, so hits come from callers that
/// keep one instance across many lookups. A one-shot process gets none.
pub struct CachedDictionary<S> {
    source: S,
    cache: Cache<String, DictionaryEntry>,
}

impl<S: DefinitionSource> CachedDictionary<S> {
    /// Wrap `source`, keeping at most `capacity` entries
    pub fn new(source: S, capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(86400))
            .build();

        Self { source, cache }
    }

    /// Look a word up, serving repeats from the cache
    ///
    /// Failed lookups are not cached.
    pub async fn lookup(&self, word: &str) -> Result<DictionaryEntry, DictionaryError> {
        let key = word.trim().to_lowercase();
        if key.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        if let Some(entry) = self.cache.get(&key) {
            tracing::debug!("Dictionary cache hit: {}", key);
            return Ok(entry);
        }

        let entry = self.source.fetch(&key).await?;
        tracing::debug!("Dictionary cache miss, fetched: {}", key);
        self.cache.insert(key, entry.clone());
        Ok(entry)
    }

    /// Number of cached entries
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

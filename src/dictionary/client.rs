//! HTTP client for the free dictionary API

use std::time::Duration;

use reqwest::{Client, Url};

use super::cache::DefinitionSource;
use super::error::DictionaryError;
use super::models::{DictionaryEntry, WordData};

/// Dictionary API client
pub struct DictionaryClient {
    /// HTTP client
    client: Client,
    /// Base URL that words are appended to
    base_url: Url,
}

impl DictionaryClient {
    /// English entries endpoint
    const API_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

    /// Create a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self, DictionaryError> {
        Self::with_base_url(Self::API_URL, timeout)
    }

    /// Create a client against another endpoint
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, DictionaryError> {
        let invalid = || DictionaryError::InvalidUrl(base_url.to_string());
        let base_url = Url::parse(base_url).map_err(|_| invalid())?;
        if base_url.cannot_be_a_base() {
            return Err(invalid());
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// URL for looking up `word`, with the word as one escaped path segment
    fn entry_url(&self, word: &str) -> Result<Url, DictionaryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    /// Fetch and condense the entry for a word
    pub async fn lookup(&self, word: &str) -> Result<DictionaryEntry, DictionaryError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        let response = self.client.get(self.entry_url(word)?).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DictionaryError::NetworkUnreachable
            } else {
                DictionaryError::RequestError(e)
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DictionaryError::NotFound(word.to_string()));
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DictionaryError::ApiError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        let data: Vec<WordData> = serde_json::from_str(&body)?;
        Ok(DictionaryEntry::from_api(&data))
    }
}

impl DefinitionSource for DictionaryClient {
    async fn fetch(&self, word: &str) -> Result<DictionaryEntry, DictionaryError> {
        self.lookup(word).await
    }
}

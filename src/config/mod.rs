//! Configuration management for Lexiquest

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::quiz::DEFAULT_LIMIT;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `<category>/<filename>.txt` wordlists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist_dir: Option<PathBuf>,

    /// Words per quiz round when none is requested
    pub default_limit: usize,

    /// Maximum number of cached dictionary entries
    pub dictionary_cache_capacity: u64,

    /// Dictionary request timeout in seconds
    pub dictionary_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist_dir: None,
            default_limit: DEFAULT_LIMIT,
            dictionary_cache_capacity: 1000,
            dictionary_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "lexiquest")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "lexiquest").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the progress document path inside `data_dir`
    pub fn progress_path(data_dir: &Path) -> PathBuf {
        data_dir.join("progress.json")
    }

    /// Get the wordlist directory, falling back to `<data_dir>/wordlists`
    pub fn resolved_wordlist_dir(&self, data_dir: &Path) -> PathBuf {
        self.wordlist_dir.clone().unwrap_or_else(|| data_dir.join("wordlists"))
    }
}

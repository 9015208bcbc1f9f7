//! Data models for dictionary API responses

use serde::{Deserialize, Serialize};

/// Pronunciation as returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub audio: String,
}

/// One definition of a meaning
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}

/// Definitions grouped by part of speech
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// A raw entry from the API (one word may return several)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordData {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// The leading definition of one part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sense {
    pub part_of_speech: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Condensed dictionary entry shown alongside a quiz word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub phonetic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    pub meanings: Vec<Sense>,
}

impl DictionaryEntry {
    /// Condense raw API entries, keeping only the first one
    ///
    /// The phonetic falls back to the first non-empty phonetics text, the
    /// audio is the first non-empty link, and each part of speech keeps its
    /// first definition.
    pub fn from_api(data: &[WordData]) -> Self {
        let Some(first) = data.first() else {
            return Self::default();
        };

        let phonetic = if first.phonetic.is_empty() {
            first
                .phonetics
                .iter()
                .find(|p| !p.text.is_empty())
                .map(|p| p.text.clone())
                .unwrap_or_default()
        } else {
            first.phonetic.clone()
        };

        let audio = first.phonetics.iter().find(|p| !p.audio.is_empty()).map(|p| p.audio.clone());

        let meanings = first
            .meanings
            .iter()
            .filter_map(|m| {
                let def = m.definitions.first()?;
                Some(Sense {
                    part_of_speech: m.part_of_speech.clone(),
                    definition: def.definition.clone(),
                    example: (!def.example.is_empty()).then(|| def.example.clone()),
                })
            })
            .collect();

        Self { word: first.word.clone(), phonetic, audio, meanings }
    }
}

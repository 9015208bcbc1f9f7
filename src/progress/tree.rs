//! The weight tree: category -> wordlist file -> word -> weight

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::weight::{decay, is_storable};

/// Weights for the words of one wordlist file
pub type WordWeights = BTreeMap<String, f64>;

/// Practice weights for every wordlist the user has touched
///
/// Serializes as `{category: {filename: {word: weight}}}`. Paths are created
/// lazily through [`WeightTree::ensure`], never for untouched wordlists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTree {
    categories: BTreeMap<String, BTreeMap<String, WordWeights>>,
}

impl WeightTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the word weights for a wordlist
    pub fn ensure(&mut self, category: &str, filename: &str) -> &mut WordWeights {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(filename.to_string())
            .or_default()
    }

    /// Get the word weights for a wordlist (if any were recorded)
    pub fn words(&self, category: &str, filename: &str) -> Option<&WordWeights> {
        self.categories.get(category)?.get(filename)
    }

    /// Get the stored weight of a single word
    pub fn weight(&self, category: &str, filename: &str, word: &str) -> Option<f64> {
        self.words(category, filename)?.get(word).copied()
    }

    /// Record one practice for each word, in order
    ///
    /// A word listed twice is decayed twice.
    pub fn apply_practice<I, S>(
        &mut self,
        category: &str,
        filename: &str,
        words: I,
    ) -> &WordWeights
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let weights = self.ensure(category, filename);
        for word in words {
            let word = word.as_ref();
            let next = decay(weights.get(word).copied());
            weights.insert(word.to_string(), next);
        }
        weights
    }

    /// Remove the progress of a wordlist, dropping the category if it empties
    ///
    /// Returns whether the wordlist had any progress entry.
    pub fn delete_subtree(&mut self, category: &str, filename: &str) -> bool {
        let Some(files) = self.categories.get_mut(category) else {
            return false;
        };
        if files.remove(filename).is_none() {
            return false;
        }
        if files.is_empty() {
            self.categories.remove(category);
        }
        true
    }

    /// Check whether a category has any recorded wordlists
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterate over every stored `(category, filename, word, weight)`
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str, f64)> {
        self.categories.iter().flat_map(|(category, files)| {
            files.iter().flat_map(move |(filename, words)| {
                words.iter().map(move |(word, weight)| {
                    (category.as_str(), filename.as_str(), word.as_str(), *weight)
                })
            })
        })
    }

    /// First stored weight that no practice history could have produced
    pub fn invalid_entry(&self) -> Option<(&str, &str, &str, f64)> {
        self.entries().find(|(_, _, _, weight)| !is_storable(*weight))
    }

    /// Whether no progress has been recorded at all
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::weight::{DECAY_FACTOR, DEFAULT_WEIGHT, MIN_WEIGHT};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn default_tree_is_empty() {
        let tree = WeightTree::default();
        assert!(tree.is_empty());
        assert!(tree.words("toeic", "day1").is_none());
    }

    #[test]
    fn ensure_creates_path_once() {
        let mut tree = WeightTree::new();
        tree.ensure("toeic", "day1").insert("apple".into(), 5.0);
        tree.ensure("toeic", "day1");

        assert_eq!(tree.weight("toeic", "day1", "apple"), Some(5.0));
        assert!(tree.has_category("toeic"));
    }

    #[test]
    fn apply_practice_decays_each_word() {
        let mut tree = WeightTree::new();
        let weights = tree.apply_practice("toeic", "day1", ["apple", "banana"]);

        assert_eq!(weights.len(), 2);
        assert_eq!(tree.weight("toeic", "day1", "apple"), Some(DEFAULT_WEIGHT * DECAY_FACTOR));
        assert_eq!(tree.weight("toeic", "day1", "cherry"), None);
    }

    #[test]
    fn duplicate_words_in_one_submission_compound() {
        let mut tree = WeightTree::new();
        tree.apply_practice("toeic", "day1", ["apple", "apple"]);

        let weight = tree.weight("toeic", "day1", "apple").unwrap();
        assert!((weight - 8.1).abs() < 1e-9);
    }

    #[test]
    fn fifty_submissions_floor_at_minimum() {
        let mut tree = WeightTree::new();
        for _ in 0..50 {
            tree.apply_practice("toeic", "day1", ["apple"]);
        }
        assert_eq!(tree.weight("toeic", "day1", "apple"), Some(MIN_WEIGHT));
    }

    #[test]
    fn delete_subtree_keeps_siblings() {
        let mut tree = WeightTree::new();
        tree.apply_practice("toeic", "day1", ["apple"]);
        tree.apply_practice("toeic", "day2", ["pear"]);

        assert!(tree.delete_subtree("toeic", "day1"));
        assert!(tree.words("toeic", "day1").is_none());
        assert!(tree.words("toeic", "day2").is_some());
    }

    #[test]
    fn delete_last_file_removes_category() {
        let mut tree = WeightTree::new();
        tree.apply_practice("toeic", "day1", ["apple"]);

        assert!(tree.delete_subtree("toeic", "day1"));
        assert!(!tree.has_category("toeic"));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_missing_subtree_leaves_tree_untouched() {
        let mut tree = WeightTree::new();
        tree.apply_practice("toeic", "day1", ["apple"]);
        let before = tree.clone();

        assert!(!tree.delete_subtree("toeic", "day9"));
        assert!(!tree.delete_subtree("gre", "day1"));
        assert_eq!(tree, before);
    }

    #[test]
    fn serializes_as_nested_maps() {
        let mut tree = WeightTree::new();
        tree.ensure("toeic", "day1").insert("apple".into(), 9.0);

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"toeic":{"day1":{"apple":9.0}}}"#);
    }

    #[test]
    fn deserializes_from_nested_maps() {
        let json = r#"{"gre": {"list3": {"abate": 2.5, "banal": 7.29}}}"#;
        let tree: WeightTree = serde_json::from_str(json).unwrap();

        assert_eq!(tree.weight("gre", "list3", "abate"), Some(2.5));
        assert_eq!(tree.entries().count(), 2);
    }

    #[test]
    fn oversized_weight_is_reported() {
        let json = r#"{"toeic": {"day1": {"apple": 9.0, "banana": 1e308}}}"#;
        let tree: WeightTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.invalid_entry(), Some(("toeic", "day1", "banana", 1e308)));

        assert_eq!(WeightTree::new().invalid_entry(), None);
    }

    proptest! {
        #[test]
        fn practiced_weights_stay_within_bounds(
            words in proptest::collection::vec("[a-e]", 0..60)
        ) {
            let mut tree = WeightTree::new();
            tree.apply_practice("c", "f", &words);
            for (_, _, _, weight) in tree.entries() {
                prop_assert!(weight >= MIN_WEIGHT);
                prop_assert!(weight < DEFAULT_WEIGHT);
            }
        }
    }
}

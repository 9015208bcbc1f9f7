//! Practice progress: the weight model, the weight tree and its persistence
//!
//! Every word carries a weight that shrinks each time it is practiced.
//! Weights live in a tree keyed by category, wordlist file and word, which
//! is loaded and saved as a single document.

pub mod store;
pub mod tree;
pub mod weight;

// Re-exports
pub use store::{JsonFileStore, MemoryStore, ProgressStore};
pub use tree::{WeightTree, WordWeights};
pub use weight::{DECAY_FACTOR, DEFAULT_WEIGHT, MIN_WEIGHT, decay, effective_weight, is_storable};

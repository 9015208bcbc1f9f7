//! Weight model for practiced words

/// Weight of a word that has never been practiced
pub const DEFAULT_WEIGHT: f64 = 10.0;

/// Floor for any stored weight, so practiced words never vanish from quizzes
pub const MIN_WEIGHT: f64 = 1.0;

/// Fraction of the weight retained after one practice
pub const DECAY_FACTOR: f64 = 0.9;

/// Weight used for sampling, given what is stored for a word
///
/// Unset words sample at [`DEFAULT_WEIGHT`]. Stored values below
/// [`MIN_WEIGHT`] (or not finite) read as the minimum.
pub fn effective_weight(stored: Option<f64>) -> f64 {
    match stored {
        None => DEFAULT_WEIGHT,
        Some(w) if w.is_finite() => w.max(MIN_WEIGHT),
        Some(_) => MIN_WEIGHT,
    }
}

/// Whether a value can appear in a well-formed progress document
///
/// Practice only ever lowers a weight from [`DEFAULT_WEIGHT`], so anything
/// above it (or not finite) marks a corrupt document.
pub fn is_storable(weight: f64) -> bool {
    weight.is_finite() && weight <= DEFAULT_WEIGHT
}

/// Weight after one more practice of a word
pub fn decay(stored: Option<f64>) -> f64 {
    (effective_weight(stored) * DECAY_FACTOR).max(MIN_WEIGHT)
}

//! Weight-proportional random choice of a single word

use rand::Rng;

use crate::progress::{WordWeights, effective_weight};
use crate::wordlist::WordRecord;

/// Pick one word, with probability proportional to its effective weight
///
/// `exclude` removes a word from the draw only while other candidates
/// remain, so it can bias the pick but never empty the set. Returns `None`
/// when `candidates` is empty or the weights sum past the `f64` range.
/// Consumes one draw from `rng` otherwise.
pub fn select<'a, R>(
    candidates: &'a [WordRecord],
    weights: &WordWeights,
    exclude: Option<&str>,
    rng: &mut R,
) -> Option<&'a WordRecord>
where
    R: Rng,
{
    let mut pool: Vec<&WordRecord> = candidates.iter().collect();
    if let Some(exclude) = exclude {
        if pool.len() > 1 && pool.iter().any(|r| r.word == exclude) {
            let filtered: Vec<&WordRecord> =
                pool.iter().copied().filter(|r| r.word != exclude).collect();
            if !filtered.is_empty() {
                pool = filtered;
            }
        }
    }

    let weighted: Vec<(&WordRecord, f64)> = pool
        .into_iter()
        .map(|record| (record, effective_weight(weights.get(&record.word).copied())))
        .collect();

    let total: f64 = weighted.iter().map(|(_, w)| w).sum();
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (record, weight) in &weighted {
        cumulative += weight;
        if cumulative >= threshold {
            return Some(*record);
        }
    }

    // Only reachable through float rounding at the very top of the range
    weighted.last().map(|(record, _)| *record)
}

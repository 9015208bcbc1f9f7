//! Building a duplicate-free batch of words for one quiz round

use std::collections::HashSet;

use rand::Rng;

use super::sampler::select;
use crate::progress::WordWeights;
use crate::wordlist::WordRecord;

/// Draw up to `limit` distinct words by repeated weighted choice
///
/// The first draw honours `exclude`; later draws do not. A word that was
/// already drawn is discarded and drawn again, so the batch holds
/// `min(limit, distinct words)` entries.
pub fn select_batch<'a, R>(
    candidates: &'a [WordRecord],
    weights: &WordWeights,
    exclude: Option<&str>,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a WordRecord>
where
    R: Rng,
{
    let distinct = candidates.iter().map(|r| r.word.as_str()).collect::<HashSet<_>>().len();
    let target = limit.min(distinct);

    let mut batch = Vec::with_capacity(target);
    let mut used = HashSet::with_capacity(target);
    if target == 0 {
        return batch;
    }

    if let Some(first) = select(candidates, weights, exclude, rng) {
        used.insert(first.word.as_str());
        batch.push(first);
    }

    while batch.len() < target {
        let Some(record) = select(candidates, weights, None, rng) else {
            break;
        };
        if used.insert(record.word.as_str()) {
            batch.push(record);
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(count: usize) -> Vec<WordRecord> {
        (0..count).map(|i| WordRecord::new(format!("w{}", i), format!("t{}", i), "n.")).collect()
    }

    #[test]
    fn empty_candidates_give_empty_batch() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_batch(&[], &WordWeights::new(), None, 10, &mut rng).is_empty());
    }

    #[test]
    fn batch_is_clamped_to_available_words() {
        let candidates = words(4);
        let mut rng = StdRng::seed_from_u64(5);
        let batch = select_batch(&candidates, &WordWeights::new(), None, 10, &mut rng);
        assert_eq!(batch.len(), 4);
    }

    #[test]
    fn zero_limit_gives_empty_batch() {
        let candidates = words(4);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(select_batch(&candidates, &WordWeights::new(), None, 0, &mut rng).is_empty());
    }

    #[test]
    fn excluded_word_never_leads_the_batch() {
        let candidates = words(3);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let batch = select_batch(&candidates, &WordWeights::new(), Some("w1"), 3, &mut rng);
            assert_ne!(batch[0].word, "w1");
            assert_eq!(batch.len(), 3);
        }
    }

    #[test]
    fn sole_excluded_word_is_still_returned() {
        let candidates = words(1);
        let mut rng = StdRng::seed_from_u64(8);
        let batch = select_batch(&candidates, &WordWeights::new(), Some("w0"), 10, &mut rng);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].word, "w0");
    }

    #[test]
    fn repeated_words_in_list_do_not_stall() {
        let mut candidates = words(2);
        candidates.push(WordRecord::new("w0", "again", "n."));
        let mut rng = StdRng::seed_from_u64(13);

        let batch = select_batch(&candidates, &WordWeights::new(), None, 10, &mut rng);
        assert_eq!(batch.len(), 2);
    }

    proptest! {
        #[test]
        fn batch_has_no_duplicates_and_expected_size(
            count in 1usize..40,
            limit in 1usize..50,
            seed in any::<u64>(),
            practiced in proptest::collection::vec((0usize..40, 1.0f64..10.0), 0..40),
        ) {
            let candidates = words(count);
            let weights: WordWeights =
                practiced.into_iter().map(|(i, w)| (format!("w{}", i), w)).collect();
            let mut rng = StdRng::seed_from_u64(seed);

            let batch = select_batch(&candidates, &weights, None, limit, &mut rng);

            let unique: HashSet<_> = batch.iter().map(|r| r.word.as_str()).collect();
            prop_assert_eq!(unique.len(), batch.len());
            prop_assert_eq!(batch.len(), limit.min(count));
        }
    }
}

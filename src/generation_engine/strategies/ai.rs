use rand::Rng;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::helpers;
use crate::generation_engine::models::{
    Combination, GenerationOptions, LottoResult, LottoStatistics, MAX_NUMBER, MIN_NUMBER,
    PICK_COUNT,
};
use crate::generation_engine::strategies::history::rank_by_frequency;

/// History entries blended into the candidate pool.
pub(crate) const HISTORY_BLEND_SIZE: usize = 10;

/// Heuristic blend of the statistics snapshot and the caller's history.
///
/// The candidate pool unions `hot_numbers`, `most_frequent`, and the ten
/// most frequent history numbers, deduplicated in that order. Only the pool
/// construction is deterministic; draws stay uniformly random, and shortfall
/// fills in from the unrestricted pool.
pub fn generate<R: Rng>(
    rng: &mut R,
    options: &GenerationOptions,
    statistics: &LottoStatistics,
    history: &[LottoResult],
) -> Result<Combination, GenerationError> {
    options.validate()?;

    let mut top_history = rank_by_frequency(history);
    top_history.truncate(HISTORY_BLEND_SIZE);

    let mut pool: Vec<u8> = Vec::new();
    for &n in statistics
        .hot_numbers
        .iter()
        .chain(statistics.most_frequent.iter())
        .chain(top_history.iter())
    {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&n)
            || pool.contains(&n)
            || options.excluded_numbers.contains(&n)
            || options.fixed_numbers.contains(&n)
        {
            continue;
        }
        pool.push(n);
    }

    let mut selected = options.fixed_numbers.clone();
    while selected.len() < PICK_COUNT && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        selected.push(pool.swap_remove(idx));
    }

    helpers::fill_random(rng, &mut selected, &options.excluded_numbers);
    helpers::finish(selected)
}

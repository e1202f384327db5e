use std::collections::BTreeMap;

use rand::Rng;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::helpers;
use crate::generation_engine::models::{Combination, GenerationOptions, LottoResult, PICK_COUNT};

/// Ranked entries kept from the caller's past results.
pub(crate) const HISTORY_POOL_SIZE: usize = 15;

/// Draw six numbers preferring those the caller has generated most often.
///
/// Past numbers are ranked by descending frequency (ties break toward the
/// smaller number), cut to the top fifteen, and drawn from uniformly; rank
/// inside the cut carries no extra weight. Shortfall fills in from the
/// unrestricted pool.
pub fn generate<R: Rng>(
    rng: &mut R,
    options: &GenerationOptions,
    history: &[LottoResult],
) -> Result<Combination, GenerationError> {
    options.validate()?;

    let mut ranked = rank_by_frequency(history);
    ranked.truncate(HISTORY_POOL_SIZE);
    ranked.retain(|n| {
        !options.excluded_numbers.contains(n) && !options.fixed_numbers.contains(n)
    });

    let mut selected = options.fixed_numbers.clone();
    while selected.len() < PICK_COUNT && !ranked.is_empty() {
        let idx = rng.gen_range(0..ranked.len());
        selected.push(ranked.swap_remove(idx));
    }

    helpers::fill_random(rng, &mut selected, &options.excluded_numbers);
    helpers::finish(selected)
}

/// Every number seen in past results, most frequent first.
pub(crate) fn rank_by_frequency(history: &[LottoResult]) -> Vec<u8> {
    let mut frequency: BTreeMap<u8, u32> = BTreeMap::new();
    for result in history {
        for &n in &result.numbers {
            *frequency.entry(n).or_insert(0) += 1;
        }
    }
    let mut entries: Vec<(u8, u32)> = frequency.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries.into_iter().map(|(n, _)| n).collect()
}

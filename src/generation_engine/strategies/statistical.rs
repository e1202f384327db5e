use rand::Rng;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::helpers;
use crate::generation_engine::models::{
    Combination, GenerationOptions, LottoStatistics, MAX_NUMBER, MIN_NUMBER,
};

/// Highest-priority entries kept from the hot/frequent union.
pub(crate) const PRIORITY_POOL_SIZE: usize = 10;
/// Picks taken from the priority pool before random fill, fixed included.
pub(crate) const PRIORITY_DRAW_TARGET: usize = 4;

/// Draw six numbers biased toward the statistics snapshot's hot and
/// most-frequent numbers.
///
/// The priority pool is the union of `hot_numbers` and `most_frequent` in
/// supplied order (not re-ranked), minus excluded and fixed numbers, capped
/// at ten entries. Up to four picks come from it; the rest fill in from the
/// unrestricted pool.
pub fn generate<R: Rng>(
    rng: &mut R,
    statistics: &LottoStatistics,
    options: &GenerationOptions,
) -> Result<Combination, GenerationError> {
    options.validate()?;

    let mut priority: Vec<u8> = Vec::new();
    for &n in statistics
        .hot_numbers
        .iter()
        .chain(statistics.most_frequent.iter())
    {
        if priority.len() == PRIORITY_POOL_SIZE {
            break;
        }
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&n)
            || priority.contains(&n)
            || options.excluded_numbers.contains(&n)
            || options.fixed_numbers.contains(&n)
        {
            continue;
        }
        priority.push(n);
    }

    let mut selected = options.fixed_numbers.clone();
    while selected.len() < PRIORITY_DRAW_TARGET && !priority.is_empty() {
        let idx = rng.gen_range(0..priority.len());
        selected.push(priority.swap_remove(idx));
    }

    helpers::fill_random(rng, &mut selected, &options.excluded_numbers);
    helpers::finish(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_statistics() -> LottoStatistics {
        LottoStatistics {
            hot_numbers: vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19],
            most_frequent: vec![2, 4],
            ..LottoStatistics::default()
        }
    }

    #[test]
    fn at_least_four_picks_come_from_the_priority_pool() {
        let statistics = sample_statistics();
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let numbers = generate(&mut rng, &statistics, &GenerationOptions::default()).unwrap();
            let from_priority = numbers
                .iter()
                .filter(|n| statistics.hot_numbers.contains(n))
                .count();
            assert!(from_priority >= 4, "seed {}: {:?}", seed, numbers);
        }
    }

    #[test]
    fn empty_statistics_fall_back_to_random_fill() {
        let mut rng = StdRng::seed_from_u64(8);
        let numbers = generate(
            &mut rng,
            &LottoStatistics::default(),
            &GenerationOptions::default(),
        )
        .unwrap();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{:?}", numbers);
    }

    #[test]
    fn excluded_numbers_never_enter_the_priority_pool() {
        let statistics = sample_statistics();
        let options = GenerationOptions {
            excluded_numbers: vec![1, 3, 5],
            ..GenerationOptions::default()
        };
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let numbers = generate(&mut rng, &statistics, &options).unwrap();
            for gone in [1u8, 3, 5] {
                assert!(!numbers.contains(&gone), "seed {}: {:?}", seed, numbers);
            }
        }
    }
}

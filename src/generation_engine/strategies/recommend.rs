use rand::Rng;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::helpers;
use crate::generation_engine::models::{
    Combination, GenerationOptions, LottoResult, LottoStatistics, PICK_COUNT,
};
use crate::generation_engine::strategies::{history, random, statistical};

/// Numbers borrowed from each contributing strategy.
const PICKS_PER_SOURCE: usize = 2;

/// Composite pick: two statistical numbers, two history numbers, two random
/// numbers, deduplicated in that order behind the fixed numbers, topped up
/// from the unrestricted pool when the blend collapses below six.
pub fn generate<R: Rng>(
    rng: &mut R,
    options: &GenerationOptions,
    statistics: &LottoStatistics,
    history: &[LottoResult],
) -> Result<Combination, GenerationError> {
    options.validate()?;

    let stat_full = statistical::generate(rng, statistics, options)?;
    let hist_full = history::generate(rng, options, history)?;
    let stat_picks = &stat_full[..PICKS_PER_SOURCE];
    let hist_picks = &hist_full[..PICKS_PER_SOURCE];
    let rand_picks: Vec<u8> = random::generate(rng)
        .into_iter()
        .filter(|n| {
            !stat_picks.contains(n)
                && !hist_picks.contains(n)
                && !options.excluded_numbers.contains(n)
        })
        .take(PICKS_PER_SOURCE)
        .collect();

    let mut selected: Vec<u8> = Vec::new();
    for &n in options
        .fixed_numbers
        .iter()
        .chain(stat_picks.iter())
        .chain(hist_picks.iter())
        .chain(rand_picks.iter())
    {
        if selected.len() == PICK_COUNT {
            break;
        }
        if !selected.contains(&n) {
            selected.push(n);
        }
    }

    helpers::fill_random(rng, &mut selected, &options.excluded_numbers);
    helpers::finish(selected)
}

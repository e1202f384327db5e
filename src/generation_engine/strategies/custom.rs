use rand::Rng;
use tracing::{trace, warn};

use crate::generation_engine::checks;
use crate::generation_engine::error::GenerationError;
use crate::generation_engine::helpers;
use crate::generation_engine::models::{Combination, GenerationOptions, PICK_COUNT};
use crate::generation_engine::pool::NumberPool;

/// Whole-result redraws allowed before the constraint set is declared
/// unsatisfiable. A sum-range miss discards the entire pick; with 200
/// attempts any feasible range is hit with overwhelming probability.
pub(crate) const MAX_ATTEMPTS: u32 = 200;

/// Draw six numbers under the caller's full constraint set.
///
/// Precedence: fixed numbers are always present, excluded numbers never
/// appear (fixed wins on overlap), the consecutive/ending filters apply
/// greedily during the draw, the odd/even split is corrected by swaps after
/// the draw, and the sum range is enforced by redrawing the whole pick.
pub fn generate<R: Rng>(
    rng: &mut R,
    options: &GenerationOptions,
) -> Result<Combination, GenerationError> {
    options.validate()?;
    let sum_bounds = options.sum_range.map(|r| r.clamped());

    for attempt in 1..=MAX_ATTEMPTS {
        let Some(selected) = draw_attempt(rng, options) else {
            trace!(attempt, "pool ran dry before six picks, redrawing");
            continue;
        };
        if let Some((min, max)) = sum_bounds {
            let sum = checks::combination_sum(&selected);
            if sum < min || sum > max {
                trace!(attempt, sum, min, max, "sum outside target range, redrawing");
                continue;
            }
        }
        return helpers::finish(selected);
    }

    warn!(
        attempts = MAX_ATTEMPTS,
        "constraints never satisfied, giving up"
    );
    Err(GenerationError::ConstraintUnsatisfiable {
        attempts: MAX_ATTEMPTS,
    })
}

/// One pass of the greedy draw. `None` means the pool ran out before six
/// numbers were accepted, which only happens under pathologically heavy
/// exclusion/filter combinations.
fn draw_attempt<R: Rng>(rng: &mut R, options: &GenerationOptions) -> Option<Vec<u8>> {
    let mut pool = NumberPool::constrained(options);
    let mut selected = options.fixed_numbers.clone();

    while selected.len() < PICK_COUNT {
        let candidate = pool.draw(rng)?;
        // A rejected candidate stays out of the pool for this attempt.
        if options.avoid_consecutive && checks::touches_consecutive(&selected, candidate) {
            continue;
        }
        if options.avoid_same_ending && checks::shares_ending(&selected, candidate) {
            continue;
        }
        selected.push(candidate);
    }

    if options.odd_even_balance {
        balance_parity(rng, &mut selected, &mut pool, &options.fixed_numbers);
    }
    Some(selected)
}

/// Swap over-represented-parity members for pool candidates of the needed
/// parity until the split is 3:3, or until either side runs out of swappable
/// numbers. Fixed numbers are never swapped out. Best effort: a pool with no
/// candidate of the needed parity leaves the pick as drawn.
fn balance_parity<R: Rng>(
    rng: &mut R,
    selected: &mut Vec<u8>,
    pool: &mut NumberPool,
    fixed: &[u8],
) {
    for _ in 0..PICK_COUNT {
        let (odd, even) = checks::parity_counts(selected);
        if odd.abs_diff(even) <= 1 {
            return;
        }
        let need_odd = odd < even;
        let Some(pos) = selected
            .iter()
            .position(|&n| (n % 2 == 1) != need_odd && !fixed.contains(&n))
        else {
            return;
        };
        let Some(replacement) = pool.draw_where(rng, |n| (n % 2 == 1) == need_odd) else {
            return;
        };
        selected[pos] = replacement;
    }
}

//! Shared builders used by every strategy.
//!
//! Each strategy ends the same way: top the partial pick up from the
//! unrestricted pool, then sort and seal it. Centralising these two steps
//! keeps the strategy files focused on their pool construction.

use rand::Rng;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::models::{Combination, PICK_COUNT};
use crate::generation_engine::pool::NumberPool;

/// Top `selected` up to six numbers from the universe minus `excluded` and
/// minus everything already selected. Stops early only if that pool runs dry.
pub fn fill_random<R: Rng>(rng: &mut R, selected: &mut Vec<u8>, excluded: &[u8]) {
    let mut pool = NumberPool::without(selected, excluded);
    while selected.len() < PICK_COUNT {
        match pool.draw(rng) {
            Some(n) => selected.push(n),
            None => break,
        }
    }
}

/// Sort and seal a finished pick.
///
/// A pick that is short or carries duplicates cannot be repaired here, so it
/// surfaces as [`GenerationError::ConstraintUnsatisfiable`] rather than
/// leaking out as an invalid combination.
pub fn finish(mut selected: Vec<u8>) -> Result<Combination, GenerationError> {
    if selected.len() != PICK_COUNT {
        return Err(GenerationError::ConstraintUnsatisfiable { attempts: 1 });
    }
    selected.sort_unstable();
    if selected.windows(2).any(|w| w[0] == w[1]) {
        return Err(GenerationError::ConstraintUnsatisfiable { attempts: 1 });
    }
    Combination::try_from(selected)
        .map_err(|_| GenerationError::ConstraintUnsatisfiable { attempts: 1 })
}

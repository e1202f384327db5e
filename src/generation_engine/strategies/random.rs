use rand::Rng;

use crate::generation_engine::models::{Combination, MAX_NUMBER, MIN_NUMBER, PICK_COUNT};

/// Draw six distinct numbers uniformly from [1, 45].
///
/// A partial Fisher-Yates shuffle over the full range: six swaps, take the
/// front of the array. Bounded O(45) work, no rejection loop.
pub fn generate<R: Rng>(rng: &mut R) -> Combination {
    let mut universe: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
    for i in 0..PICK_COUNT {
        let j = rng.gen_range(i..universe.len());
        universe.swap(i, j);
    }
    let mut picked = [0u8; PICK_COUNT];
    picked.copy_from_slice(&universe[..PICK_COUNT]);
    picked.sort_unstable();
    picked
}

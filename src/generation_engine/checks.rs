use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::models::{BANDS, MAX_NUMBER, MIN_NUMBER, PICK_COUNT};

/// True if any two numbers differ by exactly 1.
pub fn has_consecutive(numbers: &[u8]) -> bool {
    let mut sorted: Vec<u8> = numbers.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).any(|w| w[1] - w[0] == 1)
}

/// True if `candidate` sits directly next to any already-selected number.
pub fn touches_consecutive(selected: &[u8], candidate: u8) -> bool {
    selected.iter().any(|&n| n.abs_diff(candidate) == 1)
}

/// True if two numbers share a last digit.
pub fn has_repeated_ending(numbers: &[u8]) -> bool {
    let endings: HashSet<u8> = numbers.iter().map(|n| n % 10).collect();
    endings.len() != numbers.len()
}

/// True if `candidate` shares a last digit with any already-selected number.
pub fn shares_ending(selected: &[u8], candidate: u8) -> bool {
    selected.iter().any(|&n| n % 10 == candidate % 10)
}

/// (odd count, even count).
pub fn parity_counts(numbers: &[u8]) -> (usize, usize) {
    let odd = numbers.iter().filter(|&&n| n % 2 == 1).count();
    (odd, numbers.len() - odd)
}

pub fn combination_sum(numbers: &[u8]) -> u32 {
    numbers.iter().map(|&n| u32::from(n)).sum()
}

/// Index into [`BANDS`] for a number in [1, 45].
pub fn band_index(number: u8) -> usize {
    match number {
        1..=10 => 0,
        11..=20 => 1,
        21..=30 => 2,
        31..=40 => 3,
        _ => 4,
    }
}

/// Check a caller-supplied combination: length, distinctness, range.
///
/// This is the entry hosts use to vet manually entered numbers before
/// stamping them into a result; generated combinations satisfy it by
/// construction.
pub fn validate_combination(numbers: &[u8]) -> Result<(), GenerationError> {
    let mut problems: Vec<String> = Vec::new();
    if numbers.len() != PICK_COUNT {
        problems.push(format!(
            "expected {} numbers, got {}",
            PICK_COUNT,
            numbers.len()
        ));
    }
    let distinct: HashSet<u8> = numbers.iter().copied().collect();
    if distinct.len() != numbers.len() {
        problems.push("numbers contain duplicates".into());
    }
    if numbers
        .iter()
        .any(|n| !(MIN_NUMBER..=MAX_NUMBER).contains(n))
    {
        problems.push(format!(
            "numbers must lie in [{}, {}]",
            MIN_NUMBER, MAX_NUMBER
        ));
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(GenerationError::InvalidConfiguration(problems.join("; ")))
    }
}

/// Descriptive statistics for one combination, as shown in the host's
/// result view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationSummary {
    pub sum: u32,
    pub average: f64,
    pub odd_count: usize,
    pub even_count: usize,
    /// Picks per band, in [`BANDS`] order.
    pub band_counts: [usize; BANDS.len()],
}

pub fn combination_summary(numbers: &[u8]) -> CombinationSummary {
    let sum = combination_sum(numbers);
    let (odd_count, even_count) = parity_counts(numbers);
    let mut band_counts = [0usize; BANDS.len()];
    for &n in numbers {
        band_counts[band_index(n)] += 1;
    }
    CombinationSummary {
        sum,
        average: if numbers.is_empty() {
            0.0
        } else {
            f64::from(sum) / numbers.len() as f64
        },
        odd_count,
        even_count,
        band_counts,
    }
}

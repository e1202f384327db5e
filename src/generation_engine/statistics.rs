//! Official draw records and the statistics snapshot built from them.
//!
//! The hosting application fetches published draws from its data source and
//! hands them over by value; everything here is pure computation on that
//! snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::generation_engine::models::{Combination, LottoStatistics, MAX_NUMBER, MIN_NUMBER};

time::serde::format_description!(draw_date, Date, "[year]-[month]-[day]");

/// Trailing draws considered for the hot/cold classification.
pub const DEFAULT_HOT_WINDOW: usize = 20;

const FREQUENT_RANK_SIZE: usize = 6;
const HOT_RANK_SIZE: usize = 10;

/// One published draw: six main numbers plus the bonus number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub draw_no: u32,
    pub numbers: Combination,
    pub bonus: u8,
    #[serde(with = "draw_date")]
    pub drawn_at: Date,
}

/// How a played combination fared against one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Main numbers hit, 0 to 6.
    pub matched: u8,
    /// True if the bonus number was among the played numbers.
    pub bonus_matched: bool,
}

/// Compare a played combination against one official draw.
pub fn check_draw_match(numbers: &Combination, draw: &DrawResult) -> MatchOutcome {
    let matched = numbers
        .iter()
        .filter(|n| draw.numbers.contains(n))
        .count() as u8;
    MatchOutcome {
        matched,
        bonus_matched: numbers.contains(&draw.bonus),
    }
}

/// Build a [`LottoStatistics`] snapshot from published draws.
///
/// Frequency counts cover main numbers only (the bonus is ignored).
/// `most_frequent`/`least_frequent` rank the whole input; `hot_numbers`/
/// `cold_numbers` rank the trailing `hot_window` draws by draw number.
/// Ties break toward the smaller number, and numbers never drawn count as
/// zero. An empty input yields the empty snapshot.
pub fn compile_statistics(draws: &[DrawResult], hot_window: usize) -> LottoStatistics {
    if draws.is_empty() {
        return LottoStatistics::default();
    }

    let mut ordered: Vec<&DrawResult> = draws.iter().collect();
    ordered.sort_by(|a, b| b.draw_no.cmp(&a.draw_no));

    let overall = count_frequency(&ordered);
    let window = count_frequency(&ordered[..hot_window.min(ordered.len())]);

    LottoStatistics {
        most_frequent: ranked(&overall, FREQUENT_RANK_SIZE, true),
        least_frequent: ranked(&overall, FREQUENT_RANK_SIZE, false),
        hot_numbers: ranked(&window, HOT_RANK_SIZE, true),
        cold_numbers: ranked(&window, HOT_RANK_SIZE, false),
        last_draw_numbers: ordered[0].numbers.to_vec(),
        frequency: overall,
    }
}

fn count_frequency(draws: &[&DrawResult]) -> BTreeMap<u8, u32> {
    let mut frequency = BTreeMap::new();
    for draw in draws {
        for &n in &draw.numbers {
            *frequency.entry(n).or_insert(0) += 1;
        }
    }
    frequency
}

/// Top (or bottom) `size` numbers by count over the full [1, 45] range,
/// ties toward the smaller number.
fn ranked(frequency: &BTreeMap<u8, u32>, size: usize, descending: bool) -> Vec<u8> {
    let mut entries: Vec<(u8, u32)> = (MIN_NUMBER..=MAX_NUMBER)
        .map(|n| (n, frequency.get(&n).copied().unwrap_or(0)))
        .collect();
    if descending {
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    } else {
        entries.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    }
    entries.truncate(size);
    entries.into_iter().map(|(n, _)| n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn draw(draw_no: u32, numbers: Combination, bonus: u8) -> DrawResult {
        DrawResult {
            draw_no,
            numbers,
            bonus,
            drawn_at: date!(2026 - 01 - 03),
        }
    }

    #[test]
    fn match_counts_main_numbers_and_bonus() {
        let d = draw(1100, [3, 9, 17, 25, 40, 44], 7);
        let outcome = check_draw_match(&[3, 7, 17, 20, 40, 45], &d);
        assert_eq!(outcome.matched, 3);
        assert!(outcome.bonus_matched);

        let outcome = check_draw_match(&[1, 2, 4, 5, 6, 8], &d);
        assert_eq!(outcome.matched, 0);
        assert!(!outcome.bonus_matched);
    }

    #[test]
    fn frequency_ignores_the_bonus_number() {
        let stats = compile_statistics(&[draw(1, [1, 2, 3, 4, 5, 6], 45)], DEFAULT_HOT_WINDOW);
        assert_eq!(stats.frequency.get(&45), None);
        assert_eq!(stats.frequency.get(&1), Some(&1));
    }

    #[test]
    fn most_frequent_ranks_by_count_then_value() {
        let draws = [
            draw(1, [1, 2, 3, 4, 5, 6], 7),
            draw(2, [1, 2, 3, 4, 5, 6], 7),
            draw(3, [1, 2, 3, 40, 41, 42], 7),
        ];
        let stats = compile_statistics(&draws, DEFAULT_HOT_WINDOW);
        assert_eq!(stats.most_frequent, vec![1, 2, 3, 4, 5, 6]);
        // Never-drawn numbers rank least, smallest first.
        assert_eq!(stats.least_frequent, vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn hot_numbers_only_see_the_trailing_window() {
        let mut draws = vec![draw(1, [40, 41, 42, 43, 44, 45], 1); 30];
        for (i, d) in draws.iter_mut().enumerate() {
            d.draw_no = i as u32 + 1;
        }
        // The two newest draws carry low numbers.
        draws.push(draw(100, [1, 2, 3, 4, 5, 6], 7));
        draws.push(draw(101, [1, 2, 3, 4, 5, 6], 7));

        let stats = compile_statistics(&draws, 2);
        assert_eq!(stats.hot_numbers[..6], [1, 2, 3, 4, 5, 6]);
        assert_eq!(stats.last_draw_numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_input_yields_the_empty_snapshot() {
        assert_eq!(
            compile_statistics(&[], DEFAULT_HOT_WINDOW),
            LottoStatistics::default()
        );
    }
}

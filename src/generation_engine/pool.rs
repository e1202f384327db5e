use rand::Rng;

use crate::generation_engine::models::{GenerationOptions, MAX_NUMBER, MIN_NUMBER};

/// The mutable pool of still-available numbers a strategy draws from.
///
/// Drawing removes the drawn number, so a pool never hands out duplicates.
/// Removal uses `swap_remove`; the pool is unordered by construction and
/// every draw is uniform over the remaining members.
pub struct NumberPool {
    numbers: Vec<u8>,
}

impl NumberPool {
    /// The full universe [1, 45].
    pub fn full() -> Self {
        NumberPool {
            numbers: (MIN_NUMBER..=MAX_NUMBER).collect(),
        }
    }

    /// Universe minus the options' excluded and fixed numbers.
    ///
    /// Fixed numbers are removed because the caller seeds them into the
    /// result directly; leaving them here would allow duplicates.
    pub fn constrained(options: &GenerationOptions) -> Self {
        let mut pool = Self::full();
        pool.numbers.retain(|n| {
            !options.excluded_numbers.contains(n) && !options.fixed_numbers.contains(n)
        });
        pool
    }

    /// Universe minus `taken` and `excluded`, for topping up a partial pick.
    pub fn without(taken: &[u8], excluded: &[u8]) -> Self {
        let mut pool = Self::full();
        pool.numbers
            .retain(|n| !taken.contains(n) && !excluded.contains(n));
        pool
    }

    /// Draw one number uniformly at random, removing it from the pool.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<u8> {
        if self.numbers.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.numbers.len());
        Some(self.numbers.swap_remove(idx))
    }

    /// Draw uniformly among the members matching `pred`, removing the pick.
    pub fn draw_where<R: Rng, F: Fn(u8) -> bool>(&mut self, rng: &mut R, pred: F) -> Option<u8> {
        let matching: Vec<usize> = self
            .numbers
            .iter()
            .enumerate()
            .filter(|(_, &n)| pred(n))
            .map(|(idx, _)| idx)
            .collect();
        if matching.is_empty() {
            return None;
        }
        let idx = matching[rng.gen_range(0..matching.len())];
        Some(self.numbers.swap_remove(idx))
    }

    pub fn contains(&self, value: u8) -> bool {
        self.numbers.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn full_pool_holds_45_unique_numbers() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = NumberPool::full();
        assert_eq!(pool.len(), 45);

        let mut seen = HashSet::new();
        while let Some(n) = pool.draw(&mut rng) {
            assert!((1..=45).contains(&n), "drew out-of-range {}", n);
            assert!(seen.insert(n), "duplicate draw: {}", n);
        }
        assert_eq!(seen.len(), 45);
    }

    #[test]
    fn constrained_pool_drops_excluded_and_fixed() {
        let options = GenerationOptions {
            fixed_numbers: vec![7, 14],
            excluded_numbers: vec![1, 2, 3],
            ..GenerationOptions::default()
        };
        let pool = NumberPool::constrained(&options);
        assert_eq!(pool.len(), 40);
        for gone in [1, 2, 3, 7, 14] {
            assert!(!pool.contains(gone), "{} should not be drawable", gone);
        }
    }

    #[test]
    fn draws_are_deterministic_with_a_seed() {
        let draw_five = |seed: u64| -> Vec<u8> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool = NumberPool::full();
            (0..5).filter_map(|_| pool.draw(&mut rng)).collect()
        };
        assert_eq!(draw_five(99), draw_five(99));
        assert_ne!(draw_five(99), draw_five(100));
    }

    #[test]
    fn draw_where_respects_the_predicate() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = NumberPool::full();
        for _ in 0..22 {
            let n = pool.draw_where(&mut rng, |n| n % 2 == 0);
            assert!(n.is_some_and(|n| n % 2 == 0));
        }
        // All 22 even numbers are gone.
        assert!(pool.draw_where(&mut rng, |n| n % 2 == 0).is_none());
        assert_eq!(pool.len(), 23);
    }
}

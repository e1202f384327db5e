use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::generation_engine::error::GenerationError;

// ---------------------------------------------------------------------------
// Number-space constants
// ---------------------------------------------------------------------------

/// Smallest playable number.
pub const MIN_NUMBER: u8 = 1;
/// Largest playable number.
pub const MAX_NUMBER: u8 = 45;
/// Numbers per combination.
pub const PICK_COUNT: usize = 6;

/// Smallest possible sum of a combination (1+2+3+4+5+6).
pub const MIN_COMBINATION_SUM: u32 = 21;
/// Largest possible sum of a combination (40+41+42+43+44+45).
pub const MAX_COMBINATION_SUM: u32 = 255;

/// The five contiguous bands used for balanced distribution and ball colors.
pub const BANDS: [(u8, u8); 5] = [(1, 10), (11, 20), (21, 30), (31, 40), (41, 45)];
/// Most numbers a single band may contribute to a balanced combination.
pub const BAND_QUOTA: usize = 2;

/// A finished pick: exactly six distinct numbers in [1, 45], ascending.
pub type Combination = [u8; PICK_COUNT];

// ---------------------------------------------------------------------------
// Generation method tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMethod {
    Random,
    Statistics,
    Custom,
    Balanced,
    HotCold,
    Pattern,
    Ai,
    History,
    Recommend,
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenerationMethod::Random     => "random",
            GenerationMethod::Statistics => "statistics",
            GenerationMethod::Custom     => "custom",
            GenerationMethod::Balanced   => "balanced",
            GenerationMethod::HotCold    => "hot-cold",
            GenerationMethod::Pattern    => "pattern",
            GenerationMethod::Ai         => "ai",
            GenerationMethod::History    => "history",
            GenerationMethod::Recommend  => "recommend",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Generation options
// ---------------------------------------------------------------------------

/// Target window for the combination sum.
///
/// Bounds outside the achievable [21, 255] window are clamped when the range
/// is applied, not rejected; only an inverted range fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumRange {
    pub min: u32,
    pub max: u32,
}

impl SumRange {
    /// Bounds clamped into the achievable sum window.
    pub fn clamped(&self) -> (u32, u32) {
        (
            self.min.clamp(MIN_COMBINATION_SUM, MAX_COMBINATION_SUM),
            self.max.clamp(MIN_COMBINATION_SUM, MAX_COMBINATION_SUM),
        )
    }
}

/// Caller-supplied constraints for conditioned generation.
///
/// `fixed_numbers` win over `excluded_numbers` when the caller passes a value
/// in both sets: fixed numbers are always seeded into the result first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub fixed_numbers: Vec<u8>,
    pub excluded_numbers: Vec<u8>,
    pub use_statistics: bool,
    pub avoid_consecutive: bool,
    pub avoid_same_ending: bool,
    pub odd_even_balance: bool,
    pub sum_range: Option<SumRange>,
}

impl GenerationOptions {
    /// Reject structurally invalid configuration before any drawing starts.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.fixed_numbers.len() > PICK_COUNT {
            return Err(GenerationError::InvalidConfiguration(format!(
                "at most {} fixed numbers allowed, got {}",
                PICK_COUNT,
                self.fixed_numbers.len()
            )));
        }
        let distinct: HashSet<u8> = self.fixed_numbers.iter().copied().collect();
        if distinct.len() != self.fixed_numbers.len() {
            return Err(GenerationError::InvalidConfiguration(
                "fixed numbers contain duplicates".into(),
            ));
        }
        for &n in self.fixed_numbers.iter().chain(self.excluded_numbers.iter()) {
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
                return Err(GenerationError::InvalidConfiguration(format!(
                    "number {} is outside [{}, {}]",
                    n, MIN_NUMBER, MAX_NUMBER
                )));
            }
        }
        if let Some(range) = &self.sum_range {
            if range.min > range.max {
                return Err(GenerationError::InvalidConfiguration(format!(
                    "sum range minimum {} exceeds maximum {}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Statistics snapshot
// ---------------------------------------------------------------------------

/// Read-only frequency snapshot supplied by the hosting application.
///
/// All vectors may be empty; values are expected to lie in [1, 45]. The engine
/// only reads this data and silently skips out-of-range entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LottoStatistics {
    pub most_frequent: Vec<u8>,
    pub least_frequent: Vec<u8>,
    pub hot_numbers: Vec<u8>,
    pub cold_numbers: Vec<u8>,
    pub last_draw_numbers: Vec<u8>,
    pub frequency: BTreeMap<u8, u32>,
}

// ---------------------------------------------------------------------------
// Generated result record
// ---------------------------------------------------------------------------

/// One generated combination, stamped for storage in the host's history list.
///
/// Created once by [`create_result`](crate::generation_engine::create_result)
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LottoResult {
    pub id: String,
    pub numbers: Combination,
    pub method: GenerationMethod,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
}

// ---------------------------------------------------------------------------
// Request / strategy dispatch types
// ---------------------------------------------------------------------------

/// Closed set of generation strategies with their per-strategy inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    Random,
    Balanced(GenerationOptions),
    Custom(GenerationOptions),
    Statistical {
        options: GenerationOptions,
        statistics: LottoStatistics,
    },
    History {
        options: GenerationOptions,
        history: Vec<LottoResult>,
    },
    Ai {
        options: GenerationOptions,
        statistics: LottoStatistics,
        history: Vec<LottoResult>,
    },
    Recommended {
        options: GenerationOptions,
        statistics: LottoStatistics,
        history: Vec<LottoResult>,
    },
}

impl Strategy {
    /// The method tag stamped onto results produced by this strategy.
    pub fn method(&self) -> GenerationMethod {
        match self {
            Strategy::Random => GenerationMethod::Random,
            Strategy::Balanced(_) => GenerationMethod::Balanced,
            Strategy::Custom(_) => GenerationMethod::Custom,
            Strategy::Statistical { .. } => GenerationMethod::Statistics,
            Strategy::History { .. } => GenerationMethod::History,
            Strategy::Ai { .. } => GenerationMethod::Ai,
            Strategy::Recommended { .. } => GenerationMethod::Recommend,
        }
    }
}

/// One generation call: a strategy plus an optional RNG seed.
///
/// Seeded requests reproduce the exact same numbers every time, which is
/// useful for tests and for replaying a stored pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub strategy: Strategy,
    pub rng_seed: Option<u64>,
}

impl GenerationRequest {
    /// Request with entropy seeding.
    pub fn new(strategy: Strategy) -> Self {
        GenerationRequest {
            strategy,
            rng_seed: None,
        }
    }
}

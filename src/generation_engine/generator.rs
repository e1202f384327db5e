use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use time::OffsetDateTime;
use tracing::debug;

use crate::generation_engine::error::GenerationError;
use crate::generation_engine::models::{
    Combination, GenerationMethod, GenerationOptions, GenerationRequest, LottoResult,
    LottoStatistics, Strategy,
};
use crate::generation_engine::strategies;

/// Two-letter id prefix per generation method.
fn method_prefix(method: GenerationMethod) -> &'static str {
    match method {
        GenerationMethod::Random     => "RD",
        GenerationMethod::Statistics => "ST",
        GenerationMethod::Custom     => "CU",
        GenerationMethod::Balanced   => "BA",
        GenerationMethod::HotCold    => "HC",
        GenerationMethod::Pattern    => "PT",
        GenerationMethod::Ai         => "AI",
        GenerationMethod::History    => "HI",
        GenerationMethod::Recommend  => "RC",
    }
}

/// Unique result id: method prefix, millisecond timestamp, random suffix.
fn make_result_id(method: GenerationMethod) -> String {
    let millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64;
    format!(
        "{}-{:X}-{:08X}",
        method_prefix(method),
        millis,
        rand::thread_rng().next_u32()
    )
}

/// Stamp a finished combination into a stored result record.
///
/// Labelling only: the numbers pass through untouched and nothing is
/// validated here. Callers vet manual input with
/// [`validate_combination`](crate::generation_engine::checks::validate_combination)
/// first when they need to.
pub fn create_result(numbers: Combination, method: GenerationMethod) -> LottoResult {
    LottoResult {
        id: make_result_id(method),
        numbers,
        method,
        generated_at: OffsetDateTime::now_utc(),
    }
}

/// Core dispatch: routes a request to the matching strategy and stamps the
/// outcome into a [`LottoResult`].
pub fn generate(request: GenerationRequest) -> Result<LottoResult, GenerationError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let method = request.strategy.method();
    debug!(%method, seeded = request.rng_seed.is_some(), "generating combination");

    let numbers = match &request.strategy {
        Strategy::Random => strategies::random::generate(&mut rng),

        Strategy::Balanced(options) => strategies::balanced::generate(&mut rng, options)?,

        Strategy::Custom(options) => strategies::custom::generate(&mut rng, options)?,

        Strategy::Statistical {
            options,
            statistics,
        } => strategies::statistical::generate(&mut rng, statistics, options)?,

        Strategy::History { options, history } => {
            strategies::history::generate(&mut rng, options, history)?
        }

        Strategy::Ai {
            options,
            statistics,
            history,
        } => strategies::ai::generate(&mut rng, options, statistics, history)?,

        Strategy::Recommended {
            options,
            statistics,
            history,
        } => strategies::recommend::generate(&mut rng, options, statistics, history)?,
    };

    Ok(create_result(numbers, method))
}

// ---------------------------------------------------------------------------
// Entropy-seeded convenience wrappers
// ---------------------------------------------------------------------------

pub fn generate_random_numbers() -> Combination {
    strategies::random::generate(&mut StdRng::from_entropy())
}

pub fn generate_custom_numbers(
    options: &GenerationOptions,
) -> Result<Combination, GenerationError> {
    strategies::custom::generate(&mut StdRng::from_entropy(), options)
}

pub fn generate_balanced_numbers(
    options: &GenerationOptions,
) -> Result<Combination, GenerationError> {
    strategies::balanced::generate(&mut StdRng::from_entropy(), options)
}

pub fn generate_statistical_numbers(
    statistics: &LottoStatistics,
    options: &GenerationOptions,
) -> Result<Combination, GenerationError> {
    strategies::statistical::generate(&mut StdRng::from_entropy(), statistics, options)
}

pub fn generate_history_based_numbers(
    options: &GenerationOptions,
    history: &[LottoResult],
) -> Result<Combination, GenerationError> {
    strategies::history::generate(&mut StdRng::from_entropy(), options, history)
}

pub fn generate_ai_numbers(
    options: &GenerationOptions,
    statistics: &LottoStatistics,
    history: &[LottoResult],
) -> Result<Combination, GenerationError> {
    strategies::ai::generate(&mut StdRng::from_entropy(), options, statistics, history)
}

pub fn generate_recommended_numbers(
    options: &GenerationOptions,
    statistics: &LottoStatistics,
    history: &[LottoResult],
) -> Result<Combination, GenerationError> {
    strategies::recommend::generate(&mut StdRng::from_entropy(), options, statistics, history)
}

//! Core generation engine: pools, constraints, strategies, and dispatch.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: options, statistics, results, request/strategy |
//! | `error`      | The engine's error taxonomy |
//! | `pool`       | The [1, 45] draw pool with uniform consuming draws |
//! | `checks`     | Constraint predicates, combination validation and summaries |
//! | `helpers`    | Shared fill-and-seal builders used by every strategy |
//! | `generator`  | Single entry point `generate()`, convenience wrappers, result factory |
//! | `statistics` | Draw records, match checking, statistics compilation |
//! | `strategies` | Seven generation strategies, one file each |

pub mod checks;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod pool;
pub mod statistics;
pub mod strategies;

// Re-export the public API surface so callers can use
// `generation_engine::generate` without reaching into sub-modules.
pub use checks::{combination_summary, validate_combination, CombinationSummary};
pub use error::GenerationError;
pub use generator::{
    create_result, generate, generate_ai_numbers, generate_balanced_numbers,
    generate_custom_numbers, generate_history_based_numbers, generate_random_numbers,
    generate_recommended_numbers, generate_statistical_numbers,
};
pub use models::{
    Combination, GenerationMethod, GenerationOptions, GenerationRequest, LottoResult,
    LottoStatistics, Strategy, SumRange, MAX_NUMBER, MIN_NUMBER, PICK_COUNT,
};
pub use pool::NumberPool;
pub use statistics::{
    check_draw_match, compile_statistics, DrawResult, MatchOutcome, DEFAULT_HOT_WINDOW,
};

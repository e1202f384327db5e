//! # lotto_pick_gen
//!
//! A fully offline lottery number generation engine for 6-of-45 games.
//!
//! This library turns a caller's constraints, statistics snapshot, and
//! generation history into valid six-number combinations under seven
//! selectable strategies, stamps them into immutable result records, and
//! ships a generic bounded retry executor for wrapping fallible calls.
//!
//! ## How it works
//!
//! 1. Build a [`GenerationRequest`] with a [`Strategy`] variant (carrying
//!    that strategy's inputs) and an optional RNG seed.
//! 2. Call [`generate`] — the engine seeds an RNG, constructs the strategy's
//!    candidate pool, draws under the active constraints, and seals the pick.
//! 3. The returned [`LottoResult`] carries the sorted numbers, a method tag,
//!    a unique id, and a timestamp — ready for the host's history list.
//!
//! Statistics and history are supplied by value; the engine performs no I/O
//! and never mutates them.
//!
//! ## Key guarantees
//!
//! - **Valid output**: every combination holds exactly six distinct numbers
//!   in [1, 45], sorted ascending. Infeasible constraint sets error out
//!   explicitly instead of returning short picks.
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same numbers every time.
//! - **Fixed wins**: a number in both `fixed_numbers` and `excluded_numbers`
//!   is still included; exclusion never removes a fixed number.
//!
//! ## Quick start
//!
//! ```rust
//! use lotto_pick_gen::{
//!     generate, generate_random_numbers, GenerationOptions, GenerationRequest, Strategy,
//! };
//!
//! // Minimal — one uniformly random pick:
//! let numbers = generate_random_numbers();
//! assert_eq!(numbers.len(), 6);
//!
//! // Full control — constrained, seeded, stamped into a result record:
//! let options = GenerationOptions {
//!     fixed_numbers: vec![7, 14],
//!     excluded_numbers: vec![4, 44],
//!     avoid_consecutive: true,
//!     ..GenerationOptions::default()
//! };
//! let result = generate(GenerationRequest {
//!     strategy: Strategy::Custom(options),
//!     rng_seed: Some(42),
//! })
//! .unwrap();
//!
//! assert!(result.numbers.contains(&7));
//! assert!(result.numbers.contains(&14));
//! println!("{}: {:?}", result.id, result.numbers);
//! ```

pub mod generation_engine;
pub mod retry;
pub mod web_adapter;

// Convenience re-exports so callers can use `lotto_pick_gen::generate`
// directly without reaching into `generation_engine::`.
pub use generation_engine::{
    check_draw_match, combination_summary, compile_statistics, create_result, generate,
    generate_ai_numbers, generate_balanced_numbers, generate_custom_numbers,
    generate_history_based_numbers, generate_random_numbers, generate_recommended_numbers,
    generate_statistical_numbers, validate_combination, Combination, CombinationSummary,
    DrawResult, GenerationError, GenerationMethod, GenerationOptions, GenerationRequest,
    LottoResult, LottoStatistics, MatchOutcome, NumberPool, Strategy, SumRange,
    DEFAULT_HOT_WINDOW, MAX_NUMBER, MIN_NUMBER, PICK_COUNT,
};
pub use retry::{retry, RetryOptions};

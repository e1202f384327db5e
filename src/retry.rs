//! Bounded retry with exponential backoff.
//!
//! Wraps any fallible operation in up to `max_attempts` tries with a growing
//! wait between them. The wait starts at `delay`, multiplies by
//! `backoff_multiplier` after each failure, and never exceeds `max_delay`.
//! The hosting application wraps its generation calls in this to ride out
//! soft failures without surfacing them to the user.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Retry policy. Out-of-range inputs are clamped to the nearest legal value
/// (`max_attempts` to at least 1, `backoff_multiplier` to at least 1.0)
/// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryOptions {
    pub max_attempts: u32,
    pub delay: Duration,
    pub backoff_multiplier: f64,
    pub max_delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        RetryOptions {
            max_attempts: 3,
            delay: Duration::from_millis(1000),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_millis(10_000),
        }
    }
}

/// Run `operation` until it succeeds or the attempt budget is spent.
///
/// Success returns immediately. Failure on the final attempt returns that
/// last error unchanged, preserving the root cause; there is no synthetic
/// wrapper error and no wait after the final failure. Synchronous work
/// behaves the same as asynchronous work: wrap it in the `async` block the
/// closure returns. Dropping the returned future abandons any remaining
/// attempts.
pub async fn retry<T, E, F, Fut>(mut operation: F, options: RetryOptions) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = options.max_attempts.max(1);
    let multiplier = options.backoff_multiplier.max(1.0);
    let mut delay = options.delay;
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => return Err(err),
            Err(_) => {
                warn!(
                    attempt,
                    next_delay_ms = delay.as_millis() as u64,
                    "attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
                delay = delay.mul_f64(multiplier).min(options.max_delay);
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn quick(max_attempts: u32, delay_ms: u64) -> RetryOptions {
        RetryOptions {
            max_attempts,
            delay: Duration::from_millis(delay_ms),
            ..RetryOptions::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn success_on_the_first_attempt_runs_once() {
        let calls = Cell::new(0u32);
        let result: Result<&str, &str> = retry(
            || {
                calls.set(calls.get() + 1);
                async { Ok("success") }
            },
            RetryOptions::default(),
        )
        .await;
        assert_eq!(result, Ok("success"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn one_failure_then_success_runs_twice() {
        let calls = Cell::new(0u32);
        let result: Result<&str, &str> = retry(
            || {
                let n = calls.get() + 1;
                calls.set(n);
                async move {
                    if n == 1 {
                        Err("first failure")
                    } else {
                        Ok("success")
                    }
                }
            },
            quick(3, 10),
        )
        .await;
        assert_eq!(result, Ok("success"));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_returns_the_last_error_unchanged() {
        let calls = Cell::new(0u32);
        let result: Result<(), String> = retry(
            || {
                calls.set(calls.get() + 1);
                async { Err(String::from("every attempt fails")) }
            },
            quick(3, 10),
        )
        .await;
        assert_eq!(result, Err(String::from("every attempt fails")));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_doubles_between_attempts() {
        let start = tokio::time::Instant::now();
        let result: Result<(), &str> = retry(
            || async { Err("down") },
            RetryOptions {
                max_attempts: 3,
                delay: Duration::from_millis(100),
                backoff_multiplier: 2.0,
                max_delay: Duration::from_millis(10_000),
            },
        )
        .await;
        assert!(result.is_err());
        // Waits: 100ms + 200ms, none after the final failure.
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(350), "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn max_delay_caps_the_growth() {
        let start = tokio::time::Instant::now();
        let result: Result<(), &str> = retry(
            || async { Err("down") },
            RetryOptions {
                max_attempts: 3,
                delay: Duration::from_millis(100),
                backoff_multiplier: 10.0,
                max_delay: Duration::from_millis(150),
            },
        )
        .await;
        assert!(result.is_err());
        // Waits: 100ms + 150ms (capped from 1000ms).
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(250), "{:?}", elapsed);
        assert!(elapsed < Duration::from_millis(300), "{:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn default_options_allow_three_attempts() {
        let calls = Cell::new(0u32);
        let result: Result<(), &str> = retry(
            || {
                calls.set(calls.get() + 1);
                async { Err("down") }
            },
            RetryOptions::default(),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn synchronous_work_behaves_like_asynchronous_work() {
        fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
            input.parse()
        }
        let result = retry(|| async { parse("17") }, RetryOptions::default()).await;
        assert_eq!(result, Ok(17));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_max_attempts_is_clamped_to_one() {
        let calls = Cell::new(0u32);
        let result: Result<(), &str> = retry(
            || {
                calls.set(calls.get() + 1);
                async { Err("down") }
            },
            quick(0, 10),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}

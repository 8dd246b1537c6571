//! Retrying transient operations with exponential backoff.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// Re-invokes an async operation until it succeeds or attempts run out.
///
/// The operation is invoked at most `max_retries` times (a value of 0 is
/// treated as 1). Between attempts the task sleeps `base_delay * 2^n`
/// for attempt `n`, pure exponential backoff with no jitter. The last
/// failure is returned once attempts are exhausted.
///
/// There is no built-in cancellation: dropping the returned future stops
/// the retries.
pub async fn retry_operation<T, E, F, Fut>(
    mut operation: F,
    max_retries: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let attempts = max_retries.max(1);
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt >= attempts {
                    return Err(err);
                }
                let delay = base_delay * 2u32.saturating_pow(attempt - 1);
                debug!(attempt, delay_ms = delay.as_millis() as u64, "operation failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

//! Bounded retry for transport failures.

use std::future::Future;
use std::time::Duration;

use crate::error::Result;

/// Retry budget for one upstream call.
///
/// The delay is a fixed wait between attempts; the generation service is low
/// volume, so there is no exponential backoff and no jitter.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, the first one included.
    pub max_attempts: usize,
    /// Fixed wait between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// Runs `operation` under `policy`, sleeping on the tokio timer between
/// attempts. Only errors marked retryable are attempted again; everything
/// else returns immediately.
pub async fn retry_transport<F, Fut, T>(policy: &RetryPolicy, operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    retry_transport_with_sleep(policy, operation, tokio::time::sleep).await
}

/// Same as [`retry_transport`], but with a caller-supplied sleep so the
/// policy can be exercised in tests without real waits.
pub async fn retry_transport_with_sleep<F, Fut, T, S, SFut>(
    policy: &RetryPolicy,
    mut operation: F,
    mut sleep: S,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    S: FnMut(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    log::debug!("Upstream call succeeded on attempt {}", attempt);
                }
                return Ok(value);
            }
            Err(err) if err.is_retryable() && attempt < policy.max_attempts => {
                log::warn!(
                    "Transport failure on attempt {}/{}: {}; retrying in {}ms",
                    attempt,
                    policy.max_attempts,
                    err.detail(),
                    policy.delay.as_millis()
                );
                sleep(policy.delay).await;
            }
            Err(err) => {
                if err.is_retryable() {
                    log::error!("Retry budget exhausted after {} attempts", attempt);
                }
                return Err(err);
            }
        }
    }
}

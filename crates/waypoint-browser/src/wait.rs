//! Wait conditions and deadlines for browser operations.
//!
//! Every wait is bounded. [`within`] is the single place a deadline is
//! enforced; the polling helpers build on it.
//!
//! # Deadline semantics
//!
//! The bound is left-closed, right-open: a condition satisfied strictly
//! before `timeout` has elapsed succeeds, one satisfied at or after `timeout`
//! fails. When the condition and the deadline become ready at the same
//! instant the deadline wins.
//!
//! For polled conditions the bound is exact only up to `poll_interval`: the
//! condition is observed at the poll that follows it becoming true, so one
//! satisfied less than a poll interval before the deadline can still time
//! out.

use crate::error::{BrowserError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Default timeout for wait operations (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default poll interval for checking conditions (100ms).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for wait operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Maximum time to wait for the condition.
    pub timeout: Duration,

    /// How often to check if the condition is satisfied.
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Creates a new wait configuration.
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Creates a config with custom timeout and default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Runs `operation` with a deadline.
///
/// # Errors
///
/// Returns `WaitTimeout` naming `description` if the deadline passes first,
/// otherwise whatever `operation` returns.
pub async fn within<F, T>(timeout: Duration, description: &str, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        () = sleep(timeout) => Err(BrowserError::WaitTimeout {
            condition: description.to_string(),
            timeout,
        }),
        result = operation => result,
    }
}

/// Waits for a condition to become true, with timeout.
///
/// The condition function is called repeatedly at `poll_interval` until
/// it returns true or the timeout expires.
///
/// # Example
///
/// ```ignore
/// wait_for(
///     || async { element.is_visible().await },
///     WaitConfig::default(),
///     "element to be visible"
/// ).await?;
/// ```
pub async fn wait_for<F, Fut>(condition: F, config: WaitConfig, description: &str) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    wait_for_result(
        || {
            let check = condition();
            async move { Ok::<_, BrowserError>(check.await) }
        },
        config,
        description,
    )
    .await
}

/// Waits for a condition that returns a `Result<bool>`.
///
/// Errors from the condition are treated as transient (the page may be
/// mid-navigation) and polling continues until the deadline.
///
/// The condition is checked at `0, poll_interval, 2 * poll_interval, ...`
/// and never at the deadline itself, so the effective resolution is one
/// poll interval.
pub async fn wait_for_result<F, Fut>(
    condition: F,
    config: WaitConfig,
    description: &str,
) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    within(config.timeout, description, async {
        loop {
            if let Ok(true) = condition().await {
                return Ok::<_, BrowserError>(());
            }
            sleep(config.poll_interval).await;
        }
    })
    .await
}

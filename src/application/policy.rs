//! Per-stage failure policies.
//!
//! [`FallbackPolicy`] names what a stage does when it fails. [`CallPolicy`]
//! bounds every external call with a timeout and a retry budget.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::warn;

use crate::error::{Error, Result};

/// What a stage does with its own failure.
pub enum FallbackPolicy<I, T> {
    /// Surface the error to the orchestrator.
    Propagate,
    /// Log the error and substitute a value derived from the stage input.
    DefaultTo(fn(&I) -> T),
}

impl<I, T> FallbackPolicy<I, T> {
    /// Apply the policy to a stage result.
    ///
    /// # Errors
    ///
    /// Returns the original error under [`FallbackPolicy::Propagate`].
    /// [`FallbackPolicy::DefaultTo`] never returns an error.
    pub fn apply<E: fmt::Display>(
        &self,
        stage: &'static str,
        input: &I,
        result: std::result::Result<T, E>,
    ) -> std::result::Result<T, E> {
        match (result, self) {
            (Ok(value), _) => Ok(value),
            (Err(err), Self::Propagate) => Err(err),
            (Err(err), Self::DefaultTo(default)) => {
                warn!(stage, error = %err, "Stage failed, using fallback");
                Ok(default(input))
            }
        }
    }

    #[must_use]
    pub const fn propagates(&self) -> bool {
        matches!(self, Self::Propagate)
    }
}

impl<I, T> Clone for FallbackPolicy<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T> Copy for FallbackPolicy<I, T> {}

impl<I, T> fmt::Debug for FallbackPolicy<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Propagate => f.write_str("Propagate"),
            Self::DefaultTo(_) => f.write_str("DefaultTo(..)"),
        }
    }
}

/// Timeout and retry budget for one external call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallPolicy {
    /// Upper bound on a single attempt.
    pub timeout: Duration,
    /// Total attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Pause between a failed attempt and the next.
    pub retry_delay: Duration,
}

impl CallPolicy {
    #[must_use]
    pub const fn new(timeout: Duration, max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            timeout,
            max_attempts,
            retry_delay,
        }
    }

    /// One attempt, no retries.
    #[must_use]
    pub const fn once(timeout: Duration) -> Self {
        Self::new(timeout, 1, Duration::ZERO)
    }

    /// Run `call` under this policy, retrying on error or timeout.
    ///
    /// # Errors
    ///
    /// Returns the last attempt's error once the budget is spent. A timed-out
    /// attempt yields [`Error::Timeout`].
    pub async fn run<T, F, Fut>(&self, operation: &'static str, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let outcome = match timeout(self.timeout, call()).await {
                Ok(result) => result,
                Err(_) => Err(Error::Timeout {
                    operation,
                    secs: self.timeout.as_secs(),
                }),
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(err) if attempt < attempts => {
                    warn!(
                        operation,
                        attempt,
                        max_attempts = attempts,
                        error = %err,
                        "External call failed, retrying"
                    );
                    sleep(self.retry_delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(30), 3, Duration::from_secs(1))
    }
}

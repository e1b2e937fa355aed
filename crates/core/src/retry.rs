//! Bounded-timeout, fixed-delay retry for backend reads.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Default number of attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default pause between attempts.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How many times a read is attempted, how long each attempt may take, and
/// how long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Values below 1 are treated as 1.
    pub max_attempts: u32,
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RetryPolicy {
    /// Longest a [`retry`] call can take: every attempt timing out, plus the
    /// delays between them.
    pub fn worst_case(&self) -> Duration {
        let attempts = self.max_attempts.max(1);
        self.timeout * attempts + self.delay * (attempts - 1)
    }
}

/// Why a single attempt did not produce a value.
#[derive(Debug, thiserror::Error)]
pub enum AttemptError<E> {
    #[error("timed out after {0:?}")]
    TimedOut(Duration),

    #[error("{0}")]
    Failed(E),
}

/// Run `fut` under the policy's timeout.
pub async fn with_timeout<T, E, Fut>(timeout: Duration, fut: Fut) -> Result<T, AttemptError<E>>
where
    Fut: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(AttemptError::Failed(e)),
        Err(_) => Err(AttemptError::TimedOut(timeout)),
    }
}

/// Call `op` until it succeeds or the policy's attempts are used up.
///
/// `op` receives the 1-based attempt number. Each attempt is bounded by
/// `policy.timeout`; attempts are separated by `policy.delay`. The error of
/// the last attempt is returned.
pub async fn retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut op: F,
) -> Result<T, AttemptError<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let err = match with_timeout(policy.timeout, op(attempt)).await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if attempt >= max_attempts {
            tracing::error!(operation, attempts = attempt, error = %err, "All attempts failed");
            return Err(err);
        }

        tracing::warn!(operation, attempt, error = %err, "Attempt failed, retrying");
        tokio::time::sleep(policy.delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use assert_matches::assert_matches;

    use super::*;

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            delay: Duration::from_millis(10),
            timeout: Duration::from_millis(50),
        }
    }

    #[test]
    fn default_policy_matches_documented_constants() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay, Duration::from_secs(1));
        assert_eq!(policy.timeout, Duration::from_secs(5));
    }

    #[test]
    fn worst_case_sums_timeouts_and_delays() {
        assert_eq!(RetryPolicy::default().worst_case(), Duration::from_secs(17));

        let single = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        assert_eq!(single.worst_case(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_third_attempt() {
        let calls = AtomicU32::new(0);
        let result = retry(&fast_policy(), "test", |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err("backend unavailable")
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry(&fast_policy(), "test", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("connection refused") }
        })
        .await;

        assert_matches!(result, Err(AttemptError::Failed("connection refused")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_attempts_time_out() {
        let result: Result<(), AttemptError<&str>> = retry(&fast_policy(), "test", |_| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert_matches!(result, Err(AttemptError::TimedOut(d)) if d == Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_attempts_still_runs_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            ..fast_policy()
        };
        let calls = AtomicU32::new(0);
        let _: Result<(), _> = retry(&policy, "test", |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("nope") }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

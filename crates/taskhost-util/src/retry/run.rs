//! The retry control loop.

use super::backoff::Backoff;
use super::retriable::Retriable;
use std::fmt;
use std::future::Future;
use std::thread;
use tracing::debug;

/// Invoke `operation` until it succeeds or returns a terminal failure.
///
/// After every failure that does not decline retry — explicitly retryable or
/// unclassified — the loop asks `backoff` for the next wait duration and
/// blocks the calling thread for that long before trying again. Success
/// returns immediately without querying the policy; a failure classified
/// [`Terminal`](super::RetryClass::Terminal) stops the loop at once and is
/// handed back to the caller. Retriable failures are absorbed and never
/// surfaced.
///
/// There is no attempt cap and no built-in timeout: termination depends on
/// the operation eventually succeeding or declining retry. A caller that
/// needs an upper bound counts attempts inside the operation and returns a
/// terminal failure, or picks a policy whose delays grow to a ceiling it can
/// afford. There is also no cancellation signal once the loop has started.
///
/// Attempts are strictly sequential; at most one invocation of `operation`
/// is in flight at a time.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::retry::{ExponentialBackoff, RetriableError, retry_with_backoff};
/// use std::time::Duration;
///
/// let mut backoff = ExponentialBackoff::builder()
///     .initial_delay(Duration::from_millis(1))
///     .jitter(0.0)
///     .build();
///
/// let mut attempts = 0;
/// let result: Result<u32, RetriableError<&str>> = retry_with_backoff(&mut backoff, || {
///     attempts += 1;
///     if attempts < 3 {
///         Err(RetriableError::retryable("registry unavailable"))
///     } else {
///         Ok(attempts)
///     }
/// });
/// assert_eq!(result.unwrap(), 3);
/// ```
pub fn retry_with_backoff<B, F, T, E>(backoff: &mut B, mut operation: F) -> Result<T, E>
where
    B: Backoff + ?Sized,
    F: FnMut() -> Result<T, E>,
    E: Retriable + fmt::Display,
{
    loop {
        match operation() {
            Ok(value) => return Ok(value),
            Err(error) if !error.retry_class().should_retry() => {
                debug!(error = %error, "failure declined retry; giving up");
                return Err(error);
            }
            Err(error) => {
                let delay = backoff.delay();
                debug!(error = %error, ?delay, "attempt failed; backing off");
                thread::sleep(delay);
            }
        }
    }
}

/// [`retry_with_backoff`] for async call sites.
///
/// Identical stop conditions; the inter-attempt wait yields to the runtime
/// via [`tokio::time::sleep`] instead of blocking the thread.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::retry::{ExponentialBackoff, RetriableError, retry_with_backoff_async};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut backoff = ExponentialBackoff::builder()
///     .initial_delay(Duration::from_millis(1))
///     .jitter(0.0)
///     .build();
///
/// let result: Result<u32, RetriableError<&str>> =
///     retry_with_backoff_async(&mut backoff, || async { Ok(7) }).await;
/// assert_eq!(result.unwrap(), 7);
/// # }
/// ```
pub async fn retry_with_backoff_async<B, F, Fut, T, E>(
    backoff: &mut B,
    mut operation: F,
) -> Result<T, E>
where
    B: Backoff + ?Sized,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Retriable + fmt::Display,
{
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if !error.retry_class().should_retry() => {
                debug!(error = %error, "failure declined retry; giving up");
                return Err(error);
            }
            Err(error) => {
                let delay = backoff.delay();
                debug!(error = %error, ?delay, "attempt failed; backing off");
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::{RetriableError, RetryClass};
    use tokio_test::assert_ok;
    use std::time::Duration;

    /// Counts how often the loop queries the policy.
    struct CountingBackoff {
        queries: u32,
    }

    impl CountingBackoff {
        fn new() -> Self {
            Self { queries: 0 }
        }
    }

    impl Backoff for CountingBackoff {
        fn delay(&mut self) -> Duration {
            self.queries += 1;
            Duration::from_millis(1)
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct PlainError(&'static str);

    // No override: unclassified.
    impl Retriable for PlainError {}

    #[test]
    fn test_first_attempt_success_never_queries_backoff() {
        let mut backoff = CountingBackoff::new();
        let mut attempts = 0;

        let result: Result<u32, PlainError> = retry_with_backoff(&mut backoff, || {
            attempts += 1;
            Ok(42)
        });

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts, 1);
        assert_eq!(backoff.queries, 0);
    }

    #[test]
    fn test_retries_until_success_queries_backoff_once_per_failure() {
        let mut backoff = CountingBackoff::new();
        let mut attempts = 0;

        let result: Result<u32, RetriableError<&str>> = retry_with_backoff(&mut backoff, || {
            attempts += 1;
            if attempts <= 3 {
                Err(RetriableError::retryable("transient"))
            } else {
                Ok(attempts)
            }
        });

        // 3 failures then success: 4 invocations, exactly 3 policy queries.
        assert_eq!(result.unwrap(), 4);
        assert_eq!(attempts, 4);
        assert_eq!(backoff.queries, 3);
    }

    #[test]
    fn test_terminal_failure_stops_after_one_attempt() {
        let mut backoff = CountingBackoff::new();
        let mut attempts = 0;

        let result: Result<u32, RetriableError<&str>> = retry_with_backoff(&mut backoff, || {
            attempts += 1;
            Err(RetriableError::terminal("bad request"))
        });

        let err = result.unwrap_err();
        assert_eq!(err.retry_class(), RetryClass::Terminal);
        assert_eq!(attempts, 1);
        assert_eq!(backoff.queries, 0);
    }

    #[test]
    fn test_unclassified_error_is_retried() {
        // An error that never classified itself must not end the loop.
        let mut backoff = CountingBackoff::new();
        let mut attempts = 0;

        let result: Result<u32, PlainError> = retry_with_backoff(&mut backoff, || {
            attempts += 1;
            if attempts < 3 {
                Err(PlainError("no opinion"))
            } else {
                Ok(attempts)
            }
        });

        assert_eq!(result.unwrap(), 3);
        assert_eq!(attempts, 3);
        assert_eq!(backoff.queries, 2);
    }

    #[test]
    fn test_terminal_error_is_handed_back_intact() {
        let mut backoff = CountingBackoff::new();

        let result: Result<(), RetriableError<&str>> =
            retry_with_backoff(&mut backoff, || Err(RetriableError::terminal("gone")));

        assert_eq!(result.unwrap_err().into_inner(), "gone");
    }

    #[tokio::test]
    async fn test_async_retries_until_success() {
        let mut backoff = CountingBackoff::new();
        let mut attempts = 0;

        let result: Result<u32, PlainError> = retry_with_backoff_async(&mut backoff, || {
            attempts += 1;
            let attempt = attempts;
            async move {
                if attempt < 4 {
                    Err(PlainError("flaky"))
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_ok!(&result);
        assert_eq!(result.unwrap(), 4);
        assert_eq!(attempts, 4);
        assert_eq!(backoff.queries, 3);
    }

    #[tokio::test]
    async fn test_async_terminal_failure_stops_immediately() {
        let mut backoff = CountingBackoff::new();
        let mut attempts = 0;

        let result: Result<u32, RetriableError<&str>> =
            retry_with_backoff_async(&mut backoff, || {
                attempts += 1;
                async { Err(RetriableError::terminal("rejected")) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts, 1);
        assert_eq!(backoff.queries, 0);
    }
}

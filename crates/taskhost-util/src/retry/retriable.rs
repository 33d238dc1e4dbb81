//! Retry classification carried by failure values.

use thiserror::Error;

/// Whether a failed attempt should trigger another one.
///
/// This is the explicit rendering of the classification a failure value may
/// carry: it either asks for a retry, declines one, or takes no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryClass {
    /// Another attempt may succeed.
    Retryable,
    /// Further attempts cannot succeed; the loop must stop.
    Terminal,
    /// The failure takes no position on its own retriability.
    Unclassified,
}

impl RetryClass {
    /// Whether the retry loop should keep going.
    ///
    /// Only [`Terminal`](RetryClass::Terminal) stops the loop. An unclassified
    /// failure is retried: the loop does not give up on errors that never
    /// classified themselves.
    pub fn should_retry(self) -> bool {
        !matches!(self, RetryClass::Terminal)
    }
}

/// Capability a failure value may expose to steer the retry loop.
///
/// The provided body returns [`RetryClass::Unclassified`], so an error type
/// opts in with an empty `impl` block and is still retried until it overrides
/// the classification:
///
/// ```rust
/// use taskhost_util::retry::{Retriable, RetryClass};
///
/// #[derive(Debug)]
/// struct LeaseExpired;
///
/// impl Retriable for LeaseExpired {
///     fn retry_class(&self) -> RetryClass {
///         RetryClass::Terminal
///     }
/// }
///
/// #[derive(Debug)]
/// struct SocketHiccup;
///
/// // No override: treated as retryable by the loop.
/// impl Retriable for SocketHiccup {}
/// ```
pub trait Retriable {
    /// Classify this failure for the retry loop.
    fn retry_class(&self) -> RetryClass {
        RetryClass::Unclassified
    }
}

/// An error paired with an explicit retry decision.
///
/// Wraps any error so a call site can mark it terminal or retryable without
/// defining a new error type. Display and `Error` delegate to the wrapped
/// value.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::retry::{Retriable, RetriableError, RetryClass};
///
/// let err = RetriableError::terminal("task definition rejected");
/// assert_eq!(err.retry_class(), RetryClass::Terminal);
/// assert_eq!(err.to_string(), "task definition rejected");
/// ```
#[derive(Debug, Error)]
#[error("{inner}")]
pub struct RetriableError<E> {
    inner: E,
    class: RetryClass,
}

impl<E> RetriableError<E> {
    /// Wrap an error that asks to be retried.
    pub fn retryable(inner: E) -> Self {
        Self {
            inner,
            class: RetryClass::Retryable,
        }
    }

    /// Wrap an error that declines retry.
    pub fn terminal(inner: E) -> Self {
        Self {
            inner,
            class: RetryClass::Terminal,
        }
    }

    /// Wrap an error without taking a position on retriability.
    pub fn unclassified(inner: E) -> Self {
        Self {
            inner,
            class: RetryClass::Unclassified,
        }
    }

    /// The decision this wrapper carries.
    pub fn class(&self) -> RetryClass {
        self.class
    }

    /// A reference to the wrapped error.
    pub fn get_ref(&self) -> &E {
        &self.inner
    }

    /// Unwrap into the original error.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E> Retriable for RetriableError<E> {
    fn retry_class(&self) -> RetryClass {
        self.class
    }
}

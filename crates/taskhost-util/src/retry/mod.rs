//! Retry control loop, backoff policies, and error classification.
//!
//! The loop composes two caller-supplied capabilities: a [`Backoff`] policy
//! that yields successive wait durations, and the [`Retriable`] classification
//! a failure value may carry. It keeps invoking the operation until it either
//! succeeds or produces a failure that explicitly declines retry.
//!
//! # Key Types
//!
//! - [`Backoff`] - Capability trait for wait-duration policies
//! - [`ExponentialBackoff`] - Exponential backoff with jitter
//! - [`Retriable`] / [`RetryClass`] - Retry classification on failure values
//! - [`retry_with_backoff`] - The blocking control loop
//! - [`retry_with_backoff_async`] - The same loop for async call sites
//!
//! # Examples
//!
//! ```rust
//! use taskhost_util::retry::{ExponentialBackoff, RetriableError, retry_with_backoff};
//! use std::time::Duration;
//!
//! let mut backoff = ExponentialBackoff::builder()
//!     .initial_delay(Duration::from_millis(1))
//!     .jitter(0.0)
//!     .build();
//!
//! let mut attempts = 0;
//! let result: Result<&str, RetriableError<&str>> = retry_with_backoff(&mut backoff, || {
//!     attempts += 1;
//!     if attempts < 3 {
//!         Err(RetriableError::retryable("not ready"))
//!     } else {
//!         Ok("ready")
//!     }
//! });
//! assert_eq!(result.unwrap(), "ready");
//! assert_eq!(attempts, 3);
//! ```

mod backoff;
mod retriable;
mod run;

pub use backoff::{Backoff, ExponentialBackoff, ExponentialBackoffBuilder};
pub use retriable::{Retriable, RetriableError, RetryClass};
pub use run::{retry_with_backoff, retry_with_backoff_async};

#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Low-level helper primitives shared across the taskhost agent.
//!
//! This crate collects the small building blocks the rest of the agent leans
//! on, with no networking or scheduling logic of its own:
//!
//! - **Retry with backoff** via [`retry`]
//!   - [`Backoff`](retry::Backoff) capability trait plus
//!     [`ExponentialBackoff`](retry::ExponentialBackoff) with jitter
//!   - [`Retriable`](retry::Retriable) error classification with an explicit
//!     unclassified-retries default
//! - **Structural value inspection** via [`value`] — zero-value detection and
//!   order-insensitive slice equality
//! - **String helpers** via [`strings`] — blank defaulting and decimal
//!   rendering of numeric slices
//! - **Random identifiers** via [`token`]
//!
//! # Examples
//!
//! Using the prelude for convenient imports:
//!
//! ```rust
//! use taskhost_util::prelude::*;
//! use std::time::Duration;
//!
//! let mut backoff = ExponentialBackoff::builder()
//!     .initial_delay(Duration::from_millis(1))
//!     .jitter(0.0)
//!     .build();
//!
//! let value = retry_with_backoff(&mut backoff, || {
//!     Ok::<_, RetriableError<std::io::Error>>(42)
//! });
//! assert_eq!(value.unwrap(), 42);
//! ```

pub mod retry;
pub mod strings;
pub mod token;
pub mod value;

/// Convenient re-exports of commonly used items.
///
/// Import all helpers with:
///
/// ```rust
/// use taskhost_util::prelude::*;
/// ```
pub mod prelude {
    pub use crate::retry::{
        Backoff, ExponentialBackoff, ExponentialBackoffBuilder, Retriable, RetriableError,
        RetryClass, retry_with_backoff, retry_with_backoff_async,
    };
    pub use crate::strings::{default_if_blank, uint16_slice_to_string_slice};
    pub use crate::token::rand_hex;
    pub use crate::value::{slices_deep_equal, zero_or_nil};
}

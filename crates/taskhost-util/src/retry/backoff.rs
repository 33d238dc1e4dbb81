//! Backoff policies yielding the wait duration between retry attempts.

use std::time::Duration;

/// A policy that yields successive wait durations between retry attempts.
///
/// Implementations are stateful: each call to [`delay`](Backoff::delay) may
/// advance internal state (growing the wait, for example), and the method can
/// be called arbitrarily many times. A policy instance is owned by a single
/// retry loop; sharing one across concurrent loops requires external
/// synchronization.
///
/// # Examples
///
/// A fixed-interval policy:
///
/// ```rust
/// use taskhost_util::retry::Backoff;
/// use std::time::Duration;
///
/// struct Constant(Duration);
///
/// impl Backoff for Constant {
///     fn delay(&mut self) -> Duration {
///         self.0
///     }
/// }
/// ```
pub trait Backoff {
    /// The duration to wait before the next attempt.
    fn delay(&mut self) -> Duration;

    /// Restore the policy to its initial state.
    ///
    /// The retry loop never calls this; it exists so a caller can reuse one
    /// policy object across retry sessions. The default is a no-op for
    /// stateless policies.
    fn reset(&mut self) {}
}

/// Exponential backoff with configurable jitter.
///
/// Each [`delay`](Backoff::delay) call returns the current base delay with
/// jitter applied, then grows the base by `multiplier`, capped at `max_delay`.
///
/// # Mathematical Formula
///
/// For the n-th call (0-indexed):
/// ```text
/// base_delay = min(initial_delay * (multiplier ^ n), max_delay)
/// jitter_range = base_delay * jitter
/// final_delay = base_delay + random(-jitter_range, +jitter_range)
/// ```
///
/// # Examples
///
/// ```rust
/// use taskhost_util::retry::{Backoff, ExponentialBackoff};
/// use std::time::Duration;
///
/// // Default configuration (initial=100ms, max=60s, multiplier=2.0, jitter=0.1)
/// let mut backoff = ExponentialBackoff::default();
///
/// // Custom configuration
/// let mut backoff = ExponentialBackoff::builder()
///     .initial_delay(Duration::from_millis(100))
///     .max_delay(Duration::from_secs(30))
///     .multiplier(2.0)
///     .jitter(0.0)
///     .build();
///
/// assert_eq!(backoff.delay(), Duration::from_millis(100));
/// assert_eq!(backoff.delay(), Duration::from_millis(200));
/// backoff.reset();
/// assert_eq!(backoff.delay(), Duration::from_millis(100));
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    current: Duration,
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
    jitter: f64,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }
}

impl Default for ExponentialBackoff {
    /// Create an exponential backoff with sensible defaults.
    ///
    /// Defaults:
    /// - `initial_delay`: 100ms
    /// - `max_delay`: 60s
    /// - `multiplier`: 2.0 (doubles each time)
    /// - `jitter`: 0.1 (10% randomization)
    fn default() -> Self {
        ExponentialBackoff::builder().build()
    }
}

impl Backoff for ExponentialBackoff {
    fn delay(&mut self) -> Duration {
        let base = self.current.as_secs_f64();

        // Advance the stored base for the next call, capped at max_delay.
        self.current = Duration::from_secs_f64(
            (base * self.multiplier).min(self.max_delay.as_secs_f64()),
        );

        let jittered = if self.jitter > 0.0 {
            // Jitter is applied as: base * jitter * random(-1.0, +1.0),
            // giving a range of [base * (1 - jitter), base * (1 + jitter)].
            let jitter_amount = base * self.jitter * (rand::random::<f64>() - 0.5) * 2.0;
            base + jitter_amount
        } else {
            base
        };

        Duration::from_secs_f64(jittered.min(self.max_delay.as_secs_f64()))
    }

    fn reset(&mut self) {
        self.current = self.initial_delay;
    }
}

/// Builder for configuring [`ExponentialBackoff`].
///
/// Provides a fluent API for setting backoff parameters; unset parameters fall
/// back to the documented defaults.
///
/// # Examples
///
/// ```rust
/// use taskhost_util::retry::ExponentialBackoff;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .initial_delay(Duration::from_millis(250))
///     .max_delay(Duration::from_secs(30))
///     .multiplier(1.5)
///     .jitter(0.2)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Option<Duration>,
    max_delay: Option<Duration>,
    multiplier: Option<f64>,
    jitter: Option<f64>,
}

impl ExponentialBackoffBuilder {
    /// Set the delay returned by the first [`delay`](Backoff::delay) call.
    ///
    /// Default: 100ms
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Set the ceiling the growing delay is capped at.
    ///
    /// Default: 60s
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    /// Set the growth factor applied after each delay.
    ///
    /// Default: 2.0 (doubles each time)
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Set the jitter factor (0.0 to 1.0).
    ///
    /// Jitter randomizes each returned delay to prevent thundering herd. A
    /// jitter of 0.1 means the delay can vary by ±10%. Values outside the
    /// range are clamped.
    ///
    /// Default: 0.1
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.jitter = Some(jitter.clamp(0.0, 1.0));
        self
    }

    /// Build the [`ExponentialBackoff`] instance.
    pub fn build(self) -> ExponentialBackoff {
        let initial_delay = self.initial_delay.unwrap_or(Duration::from_millis(100));
        ExponentialBackoff {
            current: initial_delay,
            initial_delay,
            max_delay: self.max_delay.unwrap_or(Duration::from_secs(60)),
            multiplier: self.multiplier.unwrap_or(2.0),
            jitter: self.jitter.unwrap_or(0.1),
        }
    }
}

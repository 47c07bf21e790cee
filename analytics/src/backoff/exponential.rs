use std::time::Duration;

use crate::backoff::RetryPolicy;

/// Delay before the first retry.
pub const DEFAULT_RETRY_INITIAL: Duration = Duration::from_millis(100);

/// Each retry waits this many times longer than the previous one.
pub const DEFAULT_RETRY_FACTOR: u32 = 2;

/// No retry waits less than this.
pub const DEFAULT_RETRY_MIN_STEP: Duration = Duration::from_millis(1);

/// No retry waits longer than this.
pub const DEFAULT_RETRY_MAX: Duration = Duration::from_secs(30);

/// Exponential backoff: `initial * factor^attempt`, bounded to `[min_step, max]`.
///
/// The delay is a pure function of the attempt number, there is no jitter and no internal
/// state. Overflow saturates at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialBackoff {
    pub initial: Duration,
    pub factor: u32,
    pub min_step: Duration,
    pub max: Duration,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::new(
            DEFAULT_RETRY_INITIAL,
            DEFAULT_RETRY_FACTOR,
            DEFAULT_RETRY_MIN_STEP,
            DEFAULT_RETRY_MAX,
        )
    }
}

impl ExponentialBackoff {
    pub const fn new(initial: Duration, factor: u32, min_step: Duration, max: Duration) -> Self {
        Self {
            initial,
            factor,
            min_step,
            max,
        }
    }

    /// Return the delay before retry number `attempt`, counting from 0.
    pub fn delay(&self, attempt: u32) -> Duration {
        let d = self
            .factor
            .checked_pow(attempt)
            .and_then(|multiplier| self.initial.checked_mul(multiplier))
            .unwrap_or(self.max);

        d.min(self.max).max(self.min_step)
    }

    /// Return an infinite iterator of the delays before successive retries, starting from
    /// attempt 0.
    pub fn iter(&self) -> impl Iterator<Item = Duration> + Send + 'static {
        let policy = *self;
        let last = self.delay(u32::MAX);
        (0..u32::MAX).map(move |attempt| policy.delay(attempt)).chain(std::iter::repeat(last))
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn retry_after(&self, attempt: u32) -> Duration {
        self.delay(attempt)
    }
}

use std::time::Duration;

/// Decides how long to wait before retrying a failed request.
///
/// Dispatch workers call it concurrently, thus an implementation must not rely on per-call
/// mutable state. Any `Fn(u32) -> Duration` closure is a `RetryPolicy`:
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use rudder_analytics::Config;
///
/// let config = Config {
///     retry_after: Some(Arc::new(|attempt: u32| Duration::from_secs(attempt as u64))),
///     ..Default::default()
/// };
/// # let _ = config;
/// ```
pub trait RetryPolicy: Send + Sync + 'static {
    /// Return the delay before the next attempt, given how many times the request has been
    /// retried so far.
    fn retry_after(&self, attempt: u32) -> Duration;
}

impl<F> RetryPolicy for F
where F: Fn(u32) -> Duration + Send + Sync + 'static
{
    fn retry_after(&self, attempt: u32) -> Duration {
        self(attempt)
    }
}

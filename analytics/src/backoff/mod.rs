//! Retry delay policies.

mod exponential;
mod retry_policy;


pub use exponential::ExponentialBackoff;
pub use exponential::DEFAULT_RETRY_FACTOR;
pub use exponential::DEFAULT_RETRY_INITIAL;
pub use exponential::DEFAULT_RETRY_MAX;
pub use exponential::DEFAULT_RETRY_MIN_STEP;
pub use retry_policy::RetryPolicy;

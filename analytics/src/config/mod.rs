#[allow(clippy::module_inception)] mod config;
mod compat;
mod error;
mod resolved;

#[cfg(test)] mod compat_test;

pub use config::Config;
pub use config::DEFAULT_BATCH_SIZE;
pub use config::DEFAULT_ENDPOINT;
pub use config::DEFAULT_INTERVAL;
pub use config::DEFAULT_MAX_BATCH_BYTES;
pub use config::DEFAULT_MAX_CONCURRENT_REQUESTS;
pub use config::DEFAULT_MAX_MESSAGE_BYTES;
pub use error::ConfigError;
pub use resolved::ResolvedConfig;

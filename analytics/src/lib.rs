#![doc = include_str!("../README.md")]
#![allow(clippy::bool_assert_comparison, clippy::type_complexity)]
#![deny(unused_qualifications)]

mod config;

pub mod backoff;
pub mod callback;
pub mod clock;
pub mod context;
pub mod logger;
pub mod testing;
pub mod uid;

#[cfg(test)] mod context_test;

pub use anyerror;
pub use anyerror::AnyError;

pub use crate::backoff::ExponentialBackoff;
pub use crate::backoff::RetryPolicy;
pub use crate::callback::Callback;
pub use crate::clock::Clock;
pub use crate::clock::SystemClock;
pub use crate::config::Config;
pub use crate::config::ConfigError;
pub use crate::config::ResolvedConfig;
pub use crate::config::DEFAULT_BATCH_SIZE;
pub use crate::config::DEFAULT_ENDPOINT;
pub use crate::config::DEFAULT_INTERVAL;
pub use crate::config::DEFAULT_MAX_BATCH_BYTES;
pub use crate::config::DEFAULT_MAX_CONCURRENT_REQUESTS;
pub use crate::config::DEFAULT_MAX_MESSAGE_BYTES;
pub use crate::context::AppInfo;
pub use crate::context::Context;
pub use crate::context::LibraryInfo;
pub use crate::logger::Logger;
pub use crate::logger::StderrLogger;
pub use crate::uid::IdGenerator;
pub use crate::uid::UuidV4;

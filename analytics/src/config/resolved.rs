use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::backoff::RetryPolicy;
use crate::callback::Callback;
use crate::clock::Clock;
use crate::config::Config;
use crate::context::Context;
use crate::logger::Logger;
use crate::uid::IdGenerator;

/// A configuration with every option populated, built by [`Config::resolve`].
///
/// The client runtime owns it for its entire lifetime and treats it as read-only. The function
/// valued fields are shared with the dispatch workers and may be called concurrently.
#[derive(Clone)]
pub struct ResolvedConfig {
    /// Where messages are sent. Never empty.
    pub endpoint: String,

    /// Flush interval.
    pub interval: Duration,

    /// The caller's client, or `reqwest::Client::default()`.
    ///
    /// Building the default client panics if the TLS backend can not be initialized; inject a
    /// client built with `reqwest::Client::builder()` to handle that error instead.
    pub transport: reqwest::Client,

    pub logger: Arc<dyn Logger>,

    /// `None` means the application is not notified about send results.
    pub callback: Option<Arc<dyn Callback>>,

    pub batch_size: usize,

    pub verbose: bool,

    /// Attached to every message. `library` identifies this crate.
    pub default_context: Context,

    pub retry_after: Arc<dyn RetryPolicy>,

    pub uid: Arc<dyn IdGenerator>,

    pub now: Arc<dyn Clock>,

    pub max_concurrent_requests: usize,

    pub no_proxy_support: bool,

    pub max_message_bytes: usize,

    pub max_batch_bytes: usize,

    pub disable_gzip: bool,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{endpoint:{}, interval:{:?}, batch_size:{}, max_message_bytes:{}, max_batch_bytes:{}, \
             max_concurrent_requests:{}, verbose:{}, no_proxy_support:{}, disable_gzip:{}, callback:{}}}",
            self.endpoint,
            self.interval,
            self.batch_size,
            self.max_message_bytes,
            self.max_batch_bytes,
            self.max_concurrent_requests,
            self.verbose,
            self.no_proxy_support,
            self.disable_gzip,
            if self.callback.is_some() { "set" } else { "none" },
        )
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("endpoint", &self.endpoint)
            .field("interval", &self.interval)
            .field("batch_size", &self.batch_size)
            .field("verbose", &self.verbose)
            .field("default_context", &self.default_context)
            .field("callback", &self.callback.is_some())
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("no_proxy_support", &self.no_proxy_support)
            .field("max_message_bytes", &self.max_message_bytes)
            .field("max_batch_bytes", &self.max_batch_bytes)
            .field("disable_gzip", &self.disable_gzip)
            .finish_non_exhaustive()
    }
}

/// Turn a resolved config back into options, so that it can be adjusted and resolved again.
///
/// Every option comes back set, so resolving the result reproduces the same config.
impl From<ResolvedConfig> for Config {
    fn from(r: ResolvedConfig) -> Self {
        Config {
            endpoint: String::new(),
            data_plane_url: r.endpoint,
            interval: i64::try_from(r.interval.as_millis()).unwrap_or(i64::MAX),
            transport: Some(r.transport),
            logger: Some(r.logger),
            callback: r.callback,
            batch_size: i64::try_from(r.batch_size).unwrap_or(i64::MAX),
            verbose: r.verbose,
            default_context: Some(r.default_context),
            retry_after: Some(r.retry_after),
            uid: Some(r.uid),
            now: Some(r.now),
            max_concurrent_requests: r.max_concurrent_requests,
            no_proxy_support: r.no_proxy_support,
            max_message_bytes: i64::try_from(r.max_message_bytes).unwrap_or(i64::MAX),
            max_batch_bytes: i64::try_from(r.max_batch_bytes).unwrap_or(i64::MAX),
            gzip: 0,
            disable_gzip: r.disable_gzip,
        }
    }
}

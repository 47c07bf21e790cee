//! Analytics client configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyerror::AnyError;
use clap::Parser;
use serde::Deserialize;
use serde::Serialize;

use crate::backoff::ExponentialBackoff;
use crate::backoff::RetryPolicy;
use crate::callback::Callback;
use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::config::compat;
use crate::config::error::ConfigError;
use crate::config::resolved::ResolvedConfig;
use crate::context::Context;
use crate::context::LibraryInfo;
use crate::logger::Logger;
use crate::logger::StderrLogger;
use crate::uid::IdGenerator;
use crate::uid::UuidV4;

/// The endpoint to which a client sends messages if none is explicitly set.
pub const DEFAULT_ENDPOINT: &str = "https://hosted.rudderlabs.com";

/// The flush interval used if none is explicitly set.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// The number of messages sent in one API call if none is explicitly set.
pub const DEFAULT_BATCH_SIZE: usize = 250;

/// The maximum number of in-flight requests to the backend API.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 1000;

/// Maximum serialized size of a single message.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 32_000;

/// Maximum serialized size of a batch, independent of [`DEFAULT_BATCH_SIZE`].
pub const DEFAULT_MAX_BATCH_BYTES: usize = 500_000;

/// Options to build an analytics client.
///
/// Every field has an "unset" value: `0`, an empty string, `false` or `None`. An unset field is
/// replaced with the library default by [`Config::with_defaults`]; see each field for its
/// default. Negative sizes and intervals can not be repaired by a default and are rejected by
/// [`Config::validate`].
///
/// A `Config` can be written as a struct literal, parsed from command-line arguments and
/// environment variables with [`Config::build`], or deserialized with serde. The injectable
/// fields (transport, logger, callback, retry policy, id generator and clock) are only settable
/// in code.
///
/// ```
/// use rudder_analytics::Config;
///
/// let resolved = Config {
///     data_plane_url: "https://example.dataplane.rudderstack.com".to_string(),
///     batch_size: 100,
///     ..Default::default()
/// }
/// .resolve()
/// .unwrap();
///
/// assert_eq!(100, resolved.batch_size);
/// ```
#[derive(Clone, Default, Serialize, Deserialize, Parser)]
#[serde(default)]
pub struct Config {
    /// Deprecated: use `data_plane_url`. Used only when `data_plane_url` is empty.
    #[arg(long, env = "RUDDER_ENDPOINT", default_value = "")]
    pub endpoint: String,

    /// The endpoint to which the client sends messages, `DEFAULT_ENDPOINT` by default.
    #[arg(long, env = "RUDDER_DATA_PLANE_URL", default_value = "")]
    pub data_plane_url: String,

    /// The flush interval in milliseconds.
    ///
    /// Messages are sent when they have been queued up to the batch size or when the flush
    /// timer fires, whichever comes first.
    #[arg(long, env = "RUDDER_INTERVAL", default_value = "0", allow_negative_numbers = true)]
    pub interval: i64,

    /// The HTTP client used to send requests, for example to change connection pooling.
    #[arg(skip)]
    #[serde(skip)]
    pub transport: Option<reqwest::Client>,

    /// The logger for messages generated by background operations.
    ///
    /// A logger writing to standard error is used if none is set.
    #[arg(skip)]
    #[serde(skip)]
    pub logger: Option<Arc<dyn Logger>>,

    /// Notified when a message is delivered or dropped.
    #[arg(skip)]
    #[serde(skip)]
    pub callback: Option<Arc<dyn Callback>>,

    /// The maximum number of messages sent in one API call.
    ///
    /// The API still enforces `max_batch_bytes` on every request, independent of the number of
    /// embedded messages.
    #[arg(long, env = "RUDDER_BATCH_SIZE", default_value = "0", allow_negative_numbers = true)]
    pub batch_size: i64,

    /// Send more frequent and detailed messages to the logger.
    #[arg(long, env = "RUDDER_VERBOSE")]
    pub verbose: bool,

    /// The context set on each message sent by the client.
    ///
    /// `library` is always replaced with the identity of this crate.
    #[arg(skip)]
    pub default_context: Option<Context>,

    /// How long to wait before retrying a failed request, given how many times it was retried.
    #[arg(skip)]
    #[serde(skip)]
    pub retry_after: Option<Arc<dyn RetryPolicy>>,

    /// Generates unique message ids. UUID v4 is used if none is set.
    #[arg(skip)]
    #[serde(skip)]
    pub uid: Option<Arc<dyn IdGenerator>>,

    /// Returns the current wall-clock time.
    #[arg(skip)]
    #[serde(skip)]
    pub now: Option<Arc<dyn Clock>>,

    /// The maximum number of concurrent requests to the backend API.
    #[arg(long, env = "RUDDER_MAX_CONCURRENT_REQUESTS", default_value = "0")]
    pub max_concurrent_requests: usize,

    /// Do not query the cluster-info endpoint and do not split payloads per node.
    #[arg(long, env = "RUDDER_NO_PROXY_SUPPORT")]
    pub no_proxy_support: bool,

    /// Maximum bytes in a message.
    #[arg(long, env = "RUDDER_MAX_MESSAGE_BYTES", default_value = "0", allow_negative_numbers = true)]
    pub max_message_bytes: i64,

    /// Maximum bytes in a batch.
    #[arg(long, env = "RUDDER_MAX_BATCH_BYTES", default_value = "0", allow_negative_numbers = true)]
    pub max_batch_bytes: i64,

    /// Deprecated: use `disable_gzip`. Any non-zero value disables gzip.
    #[arg(long, env = "RUDDER_GZIP", default_value = "0", allow_negative_numbers = true)]
    pub gzip: i64,

    /// Send request bodies uncompressed.
    #[arg(long, env = "RUDDER_DISABLE_GZIP")]
    pub disable_gzip: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("data_plane_url", &self.data_plane_url)
            .field("interval", &self.interval)
            .field("transport", &self.transport.is_some())
            .field("logger", &self.logger.is_some())
            .field("callback", &self.callback.is_some())
            .field("batch_size", &self.batch_size)
            .field("verbose", &self.verbose)
            .field("default_context", &self.default_context)
            .field("retry_after", &self.retry_after.is_some())
            .field("uid", &self.uid.is_some())
            .field("now", &self.now.is_some())
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("no_proxy_support", &self.no_proxy_support)
            .field("max_message_bytes", &self.max_message_bytes)
            .field("max_batch_bytes", &self.max_batch_bytes)
            .field("gzip", &self.gzip)
            .field("disable_gzip", &self.disable_gzip)
            .finish()
    }
}

impl Config {
    /// Parse a raw config from command-line style arguments, falling back to `RUDDER_*`
    /// environment variables.
    ///
    /// The first argument is the program name. The returned config is neither validated nor
    /// defaulted: call [`Config::resolve`] on it.
    pub fn build(args: &[&str]) -> Result<Config, ConfigError> {
        <Self as Parser>::try_parse_from(args).map_err(|e| ConfigError::ParseError {
            source: AnyError::new(&e),
            args: args.iter().map(|x| x.to_string()).collect(),
        })
    }

    /// Validate then fill every unset field with its default.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        self.validate()?;

        let resolved = self.with_defaults();
        tracing::debug!("resolved analytics config: {}", resolved);
        Ok(resolved)
    }

    /// Verify that fields without a usable default hold valid values.
    ///
    /// Checks run in a fixed order and the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval < 0 {
            return Err(ConfigError::invalid(
                "negative time intervals are not supported",
                "Interval",
                self.interval,
            ));
        }

        if self.batch_size < 0 {
            return Err(ConfigError::invalid(
                "negative batch sizes are not supported",
                "BatchSize",
                self.batch_size,
            ));
        }

        if self.max_message_bytes < 0 {
            return Err(ConfigError::invalid(
                "negative value is not supported for max message bytes",
                "MaxMessageBytes",
                self.max_message_bytes,
            ));
        }

        if self.max_batch_bytes < 0 {
            return Err(ConfigError::invalid(
                "negative value is not supported for max batch bytes",
                "MaxBatchBytes",
                self.max_batch_bytes,
            ));
        }

        Ok(())
    }

    /// Replace every unset field with its default and return the resolved config.
    ///
    /// This returns no error. It does not re-check bounds: a negative value that slipped past
    /// [`Config::validate`] is treated as unset. An unset transport is built with
    /// `reqwest::Client::default()`, which panics if the TLS backend can not be initialized.
    pub fn with_defaults(self) -> ResolvedConfig {
        let c = compat::apply_deprecated_fields(self);

        let endpoint = if c.data_plane_url.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            c.data_plane_url
        };

        let interval = match u64::try_from(c.interval) {
            Ok(0) | Err(_) => DEFAULT_INTERVAL,
            Ok(ms) => Duration::from_millis(ms),
        };

        let logger: Arc<dyn Logger> = match c.logger {
            Some(l) => l,
            None => Arc::new(StderrLogger::new(c.verbose)),
        };

        let retry_after: Arc<dyn RetryPolicy> = match c.retry_after {
            Some(r) => r,
            None => Arc::new(ExponentialBackoff::default()),
        };

        let uid: Arc<dyn IdGenerator> = match c.uid {
            Some(u) => u,
            None => Arc::new(UuidV4),
        };

        let now: Arc<dyn Clock> = match c.now {
            Some(n) => n,
            None => Arc::new(SystemClock),
        };

        let mut default_context = c.default_context.unwrap_or_default();
        default_context.remove_shadowing_extra();
        default_context.library = LibraryInfo::current();

        ResolvedConfig {
            endpoint,
            interval,
            transport: c.transport.unwrap_or_default(),
            logger,
            callback: c.callback,
            batch_size: positive_or(c.batch_size, DEFAULT_BATCH_SIZE),
            verbose: c.verbose,
            default_context,
            retry_after,
            uid,
            now,
            max_concurrent_requests: if c.max_concurrent_requests == 0 {
                DEFAULT_MAX_CONCURRENT_REQUESTS
            } else {
                c.max_concurrent_requests
            },
            no_proxy_support: c.no_proxy_support,
            max_message_bytes: positive_or(c.max_message_bytes, DEFAULT_MAX_MESSAGE_BYTES),
            max_batch_bytes: positive_or(c.max_batch_bytes, DEFAULT_MAX_BATCH_BYTES),
            disable_gzip: c.disable_gzip,
        }
    }
}

fn positive_or(v: i64, default: usize) -> usize {
    match usize::try_from(v) {
        Ok(0) | Err(_) => default,
        Ok(n) => n,
    }
}

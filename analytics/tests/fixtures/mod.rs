//! Fixtures for testing config resolution.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::Once;

use rudder_analytics::AnyError;
use rudder_analytics::Callback;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber writing to the test output, once per test binary.
///
/// The level defaults to `debug` and can be changed with `RUST_LOG`.
pub fn init_default_ut_tracing() {
    static START: Once = Once::new();

    START.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_test_writer()
            .try_init();
    });
}

/// A send result seen by [`RecordingCallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Success(String),
    Failure(String, String),
}

/// A [`Callback`] that records every notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingCallback {
    pub deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl RecordingCallback {
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }
}

impl Callback for RecordingCallback {
    fn success(&self, message_id: &str) {
        self.deliveries.lock().unwrap().push(Delivery::Success(message_id.to_string()));
    }

    fn failure(&self, message_id: &str, error: &AnyError) {
        self.deliveries.lock().unwrap().push(Delivery::Failure(message_id.to_string(), error.to_string()));
    }
}

use anyerror::AnyError;

/// Notified by the client when a message is delivered or given up on.
///
/// Called from dispatch workers, possibly concurrently.
pub trait Callback: Send + Sync + 'static {
    /// The message with id `message_id` was accepted by the backend.
    fn success(&self, message_id: &str);

    /// Sending the message with id `message_id` failed and will not be retried.
    fn failure(&self, message_id: &str, error: &AnyError);
}

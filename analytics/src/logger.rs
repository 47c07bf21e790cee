use std::fmt;

use tracing::Dispatch;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Receives the messages a client generates from background operations.
pub trait Logger: Send + Sync + 'static {
    /// Log an informational message.
    fn logf(&self, args: fmt::Arguments<'_>);

    /// Log an error.
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Log a detailed message. The client calls it only in verbose mode.
    ///
    /// Forwards to [`Logger::logf`] by default.
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(args)
    }
}

/// The default [`Logger`]: writes to standard error.
///
/// Detailed messages from [`Logger::debugf`] are written only if `verbose` is set. It owns its
/// own `tracing` subscriber and does not touch the global one.
#[derive(Debug, Clone)]
pub struct StderrLogger {
    verbose: bool,
    dispatch: Dispatch,
}

impl StderrLogger {
    pub fn new(verbose: bool) -> Self {
        Self::with_writer(verbose, std::io::stderr)
    }

    pub(crate) fn with_writer<W>(verbose: bool, make_writer: W) -> Self
    where W: for<'w> MakeWriter<'w> + Send + Sync + 'static
    {
        let level = if verbose { Level::DEBUG } else { Level::INFO };

        let subscriber = tracing_subscriber::fmt()
            .with_writer(make_writer)
            .with_max_level(level)
            .with_ansi(false)
            .with_target(false)
            .finish();

        Self {
            verbose,
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Logger for StderrLogger {
    fn logf(&self, args: fmt::Arguments<'_>) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::info!("{}", args));
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::error!("{}", args));
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::debug!("{}", args));
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::Logger;
    use super::StderrLogger;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>);

    impl Logger for Lines {
        fn logf(&self, args: fmt::Arguments<'_>) {
            self.0.lock().unwrap().push(format!("log: {}", args));
        }

        fn errorf(&self, args: fmt::Arguments<'_>) {
            self.0.lock().unwrap().push(format!("error: {}", args));
        }
    }

    #[test]
    fn test_default_debugf_forwards_to_logf() {
        let logger = Lines::default();

        logger.debugf(format_args!("batch payload {}", 7));

        assert_eq!(vec!["log: batch payload 7".to_string()], *logger.0.lock().unwrap());
    }

    #[test]
    fn test_quiet_logger_drops_debug() {
        let out = Captured::default();
        let w = out.clone();
        let logger = StderrLogger::with_writer(false, move || w.clone());

        logger.logf(format_args!("flushed {} messages", 3));
        logger.errorf(format_args!("send failed: {}", "timeout"));
        logger.debugf(format_args!("batch payload {}", "detail"));

        let text = out.text();
        assert!(text.contains("INFO"), "{}", text);
        assert!(text.contains("flushed 3 messages"), "{}", text);
        assert!(text.contains("ERROR"), "{}", text);
        assert!(text.contains("send failed: timeout"), "{}", text);
        assert!(!text.contains("batch payload"), "{}", text);
    }

    #[test]
    fn test_verbose_logger_writes_debug() {
        let out = Captured::default();
        let w = out.clone();
        let logger = StderrLogger::with_writer(true, move || w.clone());
        assert!(logger.verbose());

        logger.debugf(format_args!("batch payload {}", "detail"));

        let text = out.text();
        assert!(text.contains("DEBUG"), "{}", text);
        assert!(text.contains("batch payload detail"), "{}", text);
    }
}

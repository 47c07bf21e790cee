use anyerror::AnyError;

/// Error variants related to configuration.
#[derive(Debug, thiserror::Error)]
#[derive(PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse configuration from command-line arguments or environment.
    #[error("ParseError: {source} while parsing ({args:?})")]
    ParseError {
        /// The underlying parse error.
        source: AnyError,
        /// The arguments that failed to parse.
        args: Vec<String>,
    },

    /// A field holds a value that no default can repair, such as a negative size.
    #[error("invalid config: {reason} (Config.{field}: {value})")]
    Invalid {
        /// Why the value is rejected.
        reason: &'static str,
        /// Name of the offending option.
        field: &'static str,
        /// The offending value, rendered for display.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(reason: &'static str, field: &'static str, value: impl ToString) -> Self {
        ConfigError::Invalid {
            reason,
            field,
            value: value.to_string(),
        }
    }

    /// Return the name of the offending option if this is a field level error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { field, .. } => Some(field),
            ConfigError::ParseError { .. } => None,
        }
    }

    /// Return the rejection reason if this is a field level error.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ConfigError::Invalid { reason, .. } => Some(reason),
            ConfigError::ParseError { .. } => None,
        }
    }
}

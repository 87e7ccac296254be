//! Error types for Horizon Autocomplete.

/// The main error type for Horizon Autocomplete operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Timer-related error.
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),
    /// Signal-related error.
    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("Invalid or expired timer ID")]
    InvalidTimerId,
    /// The requested fire time cannot be represented as an `Instant`.
    #[error("Timer deadline out of range: {duration:?} from now")]
    DeadlineOverflow {
        /// The requested delay.
        duration: std::time::Duration,
    },
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("Invalid or disconnected connection ID")]
    InvalidConnection,
}

/// Errors raised while loading or validating a control configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text could not be parsed.
    #[error("Failed to parse configuration: {message}")]
    Parse {
        /// Parser diagnostic.
        message: String,
    },

    /// A field holds a value outside its allowed range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// The offending field name.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// A specialized Result type for Horizon Autocomplete operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types and handling for the `WeatherBot` application

use thiserror::Error;

/// Why a provider fetch failed. Kept for logs; never shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderFailure {
    /// Provider answered with a non-success HTTP status
    Status(u16),
    /// The request never completed (connect error, timeout, ...)
    Transport(String),
    /// The response body could not be decoded into the expected shape
    Decode(String),
}

impl std::fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderFailure::Status(code) => write!(f, "provider returned HTTP {code}"),
            ProviderFailure::Transport(msg) => write!(f, "transport failure: {msg}"),
            ProviderFailure::Decode(msg) => write!(f, "undecodable response: {msg}"),
        }
    }
}

/// Main error type for the `WeatherBot` application
#[derive(Error, Debug)]
pub enum WeatherBotError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// No place mention in the input and no prior location on record
    #[error("No location could be resolved from the input")]
    LocationNotFound,

    /// The weather provider could not supply a snapshot this turn
    #[error("Weather data unavailable: {cause}")]
    WeatherUnavailable { cause: ProviderFailure },

    /// A provider payload parsed but was missing an expected field
    #[error("Malformed weather data: {message}")]
    MalformedData { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherBotError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new malformed-data error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedData {
            message: message.into(),
        }
    }

    /// Create an unavailable error from a tagged provider failure
    pub fn unavailable(cause: ProviderFailure) -> Self {
        Self::WeatherUnavailable { cause }
    }

    /// Get the safe user-facing message for this error. The underlying
    /// cause stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherBotError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            WeatherBotError::LocationNotFound => {
                "Please specify a location or ask about the weather in a particular location."
                    .to_string()
            }
            WeatherBotError::WeatherUnavailable { .. } => {
                "Unable to retrieve weather information. Please check the location and try again."
                    .to_string()
            }
            WeatherBotError::MalformedData { .. } => {
                "Unexpected format in weather data. Please check the weather information and try again."
                    .to_string()
            }
            WeatherBotError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherBotError::config("missing API key");
        assert!(matches!(config_err, WeatherBotError::Config { .. }));

        let malformed_err = WeatherBotError::malformed("weather array empty");
        assert!(matches!(malformed_err, WeatherBotError::MalformedData { .. }));

        let unavailable_err = WeatherBotError::unavailable(ProviderFailure::Status(404));
        assert!(matches!(
            unavailable_err,
            WeatherBotError::WeatherUnavailable {
                cause: ProviderFailure::Status(404)
            }
        ));
    }

    #[test]
    fn test_user_messages_never_leak_cause() {
        let err = WeatherBotError::unavailable(ProviderFailure::Transport(
            "dns error: secret-internal-host".to_string(),
        ));
        let msg = err.user_message();
        assert!(msg.contains("Unable to retrieve weather information"));
        assert!(!msg.contains("secret-internal-host"));
    }

    #[test]
    fn test_user_message_location_not_found() {
        let err = WeatherBotError::LocationNotFound;
        assert!(err.user_message().contains("specify a location"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bot_err: WeatherBotError = io_err.into();
        assert!(matches!(bot_err, WeatherBotError::Io { .. }));
    }

    #[test]
    fn test_provider_failure_display() {
        assert_eq!(
            ProviderFailure::Status(502).to_string(),
            "provider returned HTTP 502"
        );
        assert!(ProviderFailure::Transport("timed out".into())
            .to_string()
            .contains("timed out"));
    }
}

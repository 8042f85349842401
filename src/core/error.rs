//! Error types for logger configuration and output

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognised configuration value, e.g. `invalid log level: bogus`
    #[error("invalid {field}: {value}")]
    InvalidConfig { field: String, value: String },

    /// IO error, propagated without extra context
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input type recognised but its conversion does not exist
    #[error("unimplemented")]
    Unimplemented,

    /// Input type not recognised at all
    #[error("unknown format {0}")]
    UnknownFormat(String),

    /// Command line arguments could not be interpreted
    #[error("{0}")]
    Usage(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(field: impl Into<String>, value: impl Into<String>) -> Self {
        LoggerError::InvalidConfig {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a usage error
    pub fn usage<S: Into<String>>(msg: S) -> Self {
        LoggerError::Usage(msg.into())
    }

    /// Whether this error came from an unrecognised configuration value
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, LoggerError::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("log level", "bogus");
        assert!(matches!(err, LoggerError::InvalidConfig { .. }));
        assert!(err.is_invalid_config());

        let err = LoggerError::usage("incorrect number of args");
        assert!(!err.is_invalid_config());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("log level", "bogus");
        assert_eq!(err.to_string(), "invalid log level: bogus");

        let err = LoggerError::config("handler format", "yaml");
        assert_eq!(err.to_string(), "invalid handler format: yaml");

        let err = LoggerError::UnknownFormat("xml".to_string());
        assert_eq!(err.to_string(), "unknown format xml");
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::from(io_err);

        assert!(matches!(err, LoggerError::Io(_)));
        assert_eq!(err.to_string(), "access denied");
    }
}

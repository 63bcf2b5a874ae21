use thiserror::Error;

/// Operational errors for the validator tooling.
///
/// Validation verdicts never produce these; a rejected address is a
/// [`Rejection`](crate::validator::Rejection), not an error.
#[derive(Error, Debug)]
pub enum EmailValidatorError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    // Pattern errors
    #[error("Pattern compilation failed: {pattern}: {message}")]
    Pattern { pattern: String, message: String },

    // Input / output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Report errors
    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },
}

impl EmailValidatorError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig { .. } => "configuration",
            Self::Pattern { .. } => "pattern",
            Self::Io(_) => "io",
            Self::Export { .. } | Self::UnsupportedFormat { .. } => "export",
        }
    }
}

impl From<csv::Error> for EmailValidatorError {
    fn from(err: csv::Error) -> Self {
        Self::Export { message: err.to_string() }
    }
}

impl From<serde_json::Error> for EmailValidatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export { message: err.to_string() }
    }
}

/// Result type alias for the validator tooling
pub type EmailValidatorResult<T> = std::result::Result<T, EmailValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = EmailValidatorError::config("max_input_length must be > 0");
        assert_eq!(error.category(), "configuration");
        assert!(error.to_string().contains("max_input_length"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let error: EmailValidatorError = io.into();
        assert_eq!(error.category(), "io");
    }

    #[test]
    fn test_export_errors() {
        let error = EmailValidatorError::UnsupportedFormat { format: "xlsx".into() };
        assert_eq!(error.category(), "export");
        assert_eq!(error.to_string(), "Unsupported format: xlsx");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: EmailValidatorError = json_err.into();
        assert_eq!(error.category(), "export");
    }
}

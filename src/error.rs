//! Error types for sqlout.

use thiserror::Error;

/// The main error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output sink refused more text.
    #[error("Failed to write SQL to the output sink")]
    Sink(#[from] std::fmt::Error),

    /// The underlying writer failed while receiving rendered SQL.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dialect tag not known to this build.
    #[error("Unknown dialect: '{0}'. Run `sqlout dialects` for the supported list")]
    UnknownDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RenderError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::UnknownDialect("teradata".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown dialect: 'teradata'. Run `sqlout dialects` for the supported list"
        );
    }

    #[test]
    fn test_sink_error_from_fmt() {
        let err: RenderError = std::fmt::Error.into();
        assert!(matches!(err, RenderError::Sink(_)));
    }
}

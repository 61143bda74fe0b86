//! Error types and handling for Beankeeper Core

use thiserror::Error;

/// Result type alias for Beankeeper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Beankeeper Core
#[derive(Error, Debug)]
pub enum Error {
    /// Markup loading and document access errors
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Navigation errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Document errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Failed to parse markup: {message}")]
    Parse { message: String },
}

/// Navigation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Page '{0}' not found")]
    PageNotFound(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = std::result::Result<T, RouterError>;

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = RouterError::PageNotFound("reports".to_string());
        assert_eq!(error.to_string(), "Page 'reports' not found");

        let error: Error = error.into();
        assert_eq!(error.to_string(), "Router error: Page 'reports' not found");

        let error = ConfigError::InvalidValue {
            field: "selectors.active_class".to_string(),
            value: "is active".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for field 'selectors.active_class': is active"
        );
    }
}

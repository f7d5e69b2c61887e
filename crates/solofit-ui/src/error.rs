//! Error types for the SoloFit UI
//!
//! Startup problems are reported to the browser console; the app keeps
//! running with defaults.

use solofit_core::ConfigError;
use thiserror::Error;

/// Errors that can occur in the UI crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Route not found
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Embedded configuration could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A global tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    LoggingInitFailed(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::RouteNotFound("/invalid".to_string());
        assert_eq!(error.to_string(), "Route not found: /invalid");

        let error = UiError::LoggingInitFailed("already set".to_string());
        assert_eq!(error.to_string(), "Logging initialization failed: already set");
    }

    #[test]
    fn test_config_error_converts() {
        let error = UiError::from(ConfigError::toml_parse_failed("expected `=`"));
        assert_eq!(
            error.to_string(),
            "Configuration error: TOML parse error: expected `=`"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::RouteNotFound("/x".to_string());
        assert_eq!(error.clone(), error);
    }
}

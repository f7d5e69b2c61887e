//! Result alias and logging combinators.
//!
//! Provides a combinator that turns a failed `Result` into a fallback value
//! while leaving a trace of the failure, so callers never need unwrap/expect.

use std::fmt::Display;

use crate::error::FormError;

/// The standard Result type for form operations.
pub type Result<T, E = FormError> = std::result::Result<T, E>;

/// Extension trait providing logged fallbacks for Results.
pub trait ResultExt<T> {
    /// Get the value or a default, logging the error if present.
    fn or_default_logged(self, default: T) -> T;
}

impl<T, E: Display> ResultExt<T> for std::result::Result<T, E> {
    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Operation failed, using default: {}", e);
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_or_default_logged() {
        let err: Result<u8, ConfigError> = Err(ConfigError::toml_parse_failed("bad"));
        assert_eq!(err.or_default_logged(7), 7);

        let ok: Result<u8, ConfigError> = Ok(1);
        assert_eq!(ok.or_default_logged(7), 1);
    }
}

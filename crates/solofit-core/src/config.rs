//! Application configuration.
//!
//! Every field has a default, so an empty document is a valid configuration.
//! The web front-end embeds its TOML at build time and falls back to
//! [`AppConfig::default`] when parsing or validation fails.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;
use crate::policy::PasswordPolicy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub toast: ToastConfig,
    pub logging: LoggingConfig,
}

/// Sign-in / sign-up behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    /// Minimum password length enforced on sign-up.
    pub min_password_length: usize,

    /// Also enforce upper + lower + digit on sign-up.
    pub require_complexity: bool,

    /// Deadline for a dispatched authentication request, in milliseconds.
    pub request_timeout_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: PasswordPolicy::DEFAULT_MIN_LENGTH,
            require_complexity: false,
            request_timeout_ms: 15_000,
        }
    }
}

impl AuthConfig {
    /// Password policy described by this section.
    #[must_use]
    pub const fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            min_length: self.min_password_length,
            require_complexity: self.require_complexity,
        }
    }

    /// Request deadline as a [`Duration`].
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.request_timeout_ms))
    }
}

/// Toast surface behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastConfig {
    /// How long a toast stays visible, in milliseconds.
    pub duration_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 4_000 }
    }
}

/// Browser console logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown level name.
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.level)
            .map_err(|e| ConfigError::invalid_value("logging.level", format!("{}: {e}", self.level)))
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlParseFailed`] for malformed TOML or unknown
    /// keys, and [`ConfigError::InvalidValue`] when validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::toml_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.min_password_length == 0 {
            return Err(ConfigError::invalid_value(
                "auth.min_password_length",
                "must be at least 1",
            ));
        }
        if self.auth.request_timeout_ms == 0 {
            return Err(ConfigError::invalid_value(
                "auth.request_timeout_ms",
                "must be greater than 0",
            ));
        }
        if self.toast.duration_ms == 0 {
            return Err(ConfigError::invalid_value(
                "toast.duration_ms",
                "must be greater than 0",
            ));
        }
        self.logging.level().map(|_| ())
    }
}

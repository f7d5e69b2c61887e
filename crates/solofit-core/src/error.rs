//! Error types for SoloFit form handling.
//!
//! All errors are explicit, typed and recoverable. Variants that are shown to
//! the user carry the user-facing message as their `Display` output.

use thiserror::Error;

use crate::notice::Notice;

/// Inline error attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Password must contain uppercase, lowercase, and numbers")]
    PasswordTooWeak,
}

/// Outcome of a rejected password-reset request, surfaced as a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("Please enter your email address first.")]
    EmailRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ResetError {
    /// Short heading shown above the description.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EmailRequired => "Email Required",
            Self::InvalidEmail => "Invalid Email",
        }
    }
}

impl From<ResetError> for Notice {
    fn from(err: ResetError) -> Self {
        Self::error(err.title(), err.to_string())
    }
}

/// Reasons a submit attempt did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0}")]
    Field(#[from] FieldError),

    #[error("{0}")]
    Reset(#[from] ResetError),

    #[error("a request is already in flight")]
    SubmissionInFlight,
}

/// Failures reported by an authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    AccountExists,

    #[error("authentication service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Create an unavailable-service error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    #[test]
    fn test_field_error_messages_are_user_facing() {
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_reset_error_converts_to_error_notice() {
        let notice = Notice::from(ResetError::EmailRequired);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Email Required");
        assert_eq!(notice.description, "Please enter your email address first.");

        let notice = Notice::from(ResetError::InvalidEmail);
        assert_eq!(notice.title, "Invalid Email");
        assert_eq!(notice.description, "Please enter a valid email address.");
    }

    #[test]
    fn test_form_error_wraps_field_error_transparently() {
        let err = FormError::from(FieldError::InvalidEmail);
        assert_eq!(err.to_string(), FieldError::InvalidEmail.to_string());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid_value("auth.min_password_length", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid config value for 'auth.min_password_length': must be at least 1"
        );
    }
}

//! Password rules enforced when creating an account.
//!
//! The sign-up banner advertises uppercase, lowercase and digits, but only the
//! length floor is enforced unless `require_complexity` is set.

use crate::error::FieldError;
use crate::strength::{CharacterClasses, password_length};

/// Rules checked by sign-up before a request is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_complexity: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            require_complexity: false,
        }
    }
}

impl PasswordPolicy {
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    /// Text of the advisory banner shown above the sign-up form.
    #[must_use]
    pub fn advisory(&self) -> String {
        format!(
            "Password must be at least {} characters with uppercase, lowercase, and numbers.",
            self.min_length
        )
    }

    /// Check `password` against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::PasswordTooShort`] below the length floor, or
    /// [`FieldError::PasswordTooWeak`] when complexity is required and missing.
    pub fn check(&self, password: &str) -> Result<(), FieldError> {
        if password_length(password) < self.min_length {
            return Err(FieldError::PasswordTooShort {
                min: self.min_length,
            });
        }
        if self.require_complexity && !CharacterClasses::of(password).meets_complexity() {
            return Err(FieldError::PasswordTooWeak);
        }
        Ok(())
    }
}

//! Syntactic email validation.
//!
//! No DNS or deliverability check is made: an address is accepted when it has
//! the shape `local@domain.tld` with no whitespace and exactly one `@`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

/// One `local`, `domain` or `tld` segment: no `@` and none of the characters
/// ECMAScript treats as `\s`. That set includes U+FEFF and excludes U+0085,
/// unlike the Unicode `White_Space` property behind `regex`'s `\s`.
const SEGMENT: &str = r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

#[expect(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{SEGMENT}@{SEGMENT}\.{SEGMENT}$"))
        .expect("valid email regex (verified by tests)")
});

/// Returns true iff `input` looks like `local@domain.tld`.
///
/// Total and pure; the empty string is rejected.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Validate an email address, producing the inline field error on failure.
///
/// # Errors
///
/// Returns [`FieldError::InvalidEmail`] when [`is_valid_email`] rejects `input`.
pub fn validate_email(input: &str) -> Result<(), FieldError> {
    if is_valid_email(input) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@examplecom"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_rejects_whitespace_and_extra_at() {
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@exa@mple.com"));
        assert!(!is_valid_email("user@example.com\n"));
    }

    #[test]
    fn test_whitespace_matches_browser_definition() {
        // Zero-width no-break space counts as whitespace
        assert!(!is_valid_email("a\u{FEFF}@b.co"));
        assert!(!is_valid_email("a@b\u{3000}.co"));
        assert!(!is_valid_email("a@b.c\u{00A0}o"));
        // Next-line is not whitespace for the browser
        assert!(is_valid_email("a\u{0085}@b.co"));
    }

    #[test]
    fn test_validate_email_maps_to_field_error() {
        assert_eq!(validate_email("user@example.com"), Ok(()));
        assert_eq!(validate_email("nope"), Err(FieldError::InvalidEmail));
    }
}

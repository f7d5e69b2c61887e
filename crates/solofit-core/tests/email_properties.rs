#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use proptest::prelude::*;
use solofit_core::is_valid_email;

#[test]
fn test_reference_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(!is_valid_email(""));
}

/// Property test: strings without '@' are never valid
proptest! {
    #[test]
    fn prop_no_at_sign_is_invalid(input in "[^@]{0,40}") {
        prop_assert!(!is_valid_email(&input));
    }
}

/// Property test: no '.' after the '@' is never valid
proptest! {
    #[test]
    fn prop_no_dot_in_domain_is_invalid(local in "[a-z.]{1,12}", domain in "[a-z]{1,12}") {
        let input = format!("{local}@{domain}");
        prop_assert!(!is_valid_email(&input));
    }
}

/// Property test: whitespace anywhere is never valid
proptest! {
    #[test]
    fn prop_whitespace_is_invalid(local in "[a-z]{1,8}", domain in "[a-z]{1,8}", space in "[ \t\n]") {
        let input = format!("{local}{space}@{domain}.com");
        prop_assert!(!is_valid_email(&input));
    }
}

/// Property test: well-formed addresses are always valid
proptest! {
    #[test]
    fn prop_well_formed_is_valid(local in "[a-z0-9._+-]{1,16}", domain in "[a-z0-9-]{1,16}", tld in "[a-z]{2,6}") {
        let input = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&input));
    }
}

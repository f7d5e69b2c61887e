#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use proptest::prelude::*;
use solofit_core::{StrengthBand, StrengthScore, password_strength};

/// Tests the reference passwords and their bands
#[test]
fn test_reference_passwords() {
    let cases = [
        ("", 0, StrengthBand::Weak),
        ("abcdefg", 0, StrengthBand::Weak),
        ("abcdefgh", 25, StrengthBand::Weak),
        ("Abcdefgh", 50, StrengthBand::Medium),
        ("Abcdefgh1", 65, StrengthBand::Medium),
        ("Abcdefgh123!", 100, StrengthBand::Strong),
    ];

    for (password, expected, band) in cases {
        let score = password_strength(password);
        assert_eq!(score.value(), expected, "score of {password:?}");
        assert_eq!(score.band(), band, "band of {password:?}");
    }
}

/// Property test: score never exceeds the cap
proptest! {
    #[test]
    fn prop_score_is_capped(password in ".{0,64}") {
        prop_assert!(password_strength(&password).value() <= StrengthScore::MAX);
    }
}

/// Property test: appending a character never lowers the score
proptest! {
    #[test]
    fn prop_appending_never_decreases(password in ".{0,32}", extra in any::<char>()) {
        let before = password_strength(&password);
        let mut longer = password.clone();
        longer.push(extra);
        prop_assert!(password_strength(&longer) >= before);
    }
}

/// Property test: only sums of rule points are reachable
proptest! {
    #[test]
    fn prop_score_is_sum_of_rule_points(password in "[a-zA-Z0-9!@#]{0,20}") {
        const RULE_POINTS: [u8; 5] = [25, 25, 25, 15, 10];
        let value = password_strength(&password).value();
        let reachable = (0u8..32).any(|mask| {
            let sum: u8 = RULE_POINTS
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, points)| points)
                .sum();
            sum == value
        });
        prop_assert!(reachable);
    }
}

/// Property test: bands are ordered the same way as scores
proptest! {
    #[test]
    fn prop_band_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        prop_assume!(a <= b);
        prop_assert!(StrengthBand::from_score(a) <= StrengthBand::from_score(b));
    }
}

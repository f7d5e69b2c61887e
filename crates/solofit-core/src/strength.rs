//! Password-strength heuristic used for the sign-up meter.
//!
//! The score is UI feedback only and makes no security claim. It is additive
//! and capped at [`StrengthScore::MAX`]. Length is measured by
//! [`password_length`]:
//!
//! | Rule                                   | Points |
//! |----------------------------------------|--------|
//! | at least 8 code units                  | 25     |
//! | at least 12 code units (cumulative)    | 25     |
//! | both lowercase and uppercase letters   | 25     |
//! | at least one digit                     | 15     |
//! | at least one non-alphanumeric char     | 10     |

use std::fmt;

const MEDIUM_THRESHOLD: u8 = 40;
const STRONG_THRESHOLD: u8 = 70;

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    /// Scan `input` once and record every class that appears.
    #[must_use]
    pub fn of(input: &str) -> Self {
        input.chars().fold(Self::default(), |classes, c| Self {
            lowercase: classes.lowercase || c.is_ascii_lowercase(),
            uppercase: classes.uppercase || c.is_ascii_uppercase(),
            digit: classes.digit || c.is_ascii_digit(),
            symbol: classes.symbol || !c.is_ascii_alphanumeric(),
        })
    }

    /// Upper, lower and digit all present: the rule advertised on sign-up.
    #[must_use]
    pub const fn meets_complexity(&self) -> bool {
        self.lowercase && self.uppercase && self.digit
    }
}

/// A password-strength score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MAX: u8 = 100;

    /// Raw score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Display band for this score.
    #[must_use]
    pub const fn band(self) -> StrengthBand {
        StrengthBand::from_score(self.0)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Password length in UTF-16 code units, the unit browsers report for
/// `input.value.length`. A non-BMP character such as an emoji counts twice.
#[must_use]
pub fn password_length(input: &str) -> usize {
    input.encode_utf16().count()
}

/// Score a password.
#[must_use]
pub fn password_strength(input: &str) -> StrengthScore {
    let length = password_length(input);
    let classes = CharacterClasses::of(input);

    let points = [
        (length >= 8, 25u8),
        (length >= 12, 25),
        (classes.lowercase && classes.uppercase, 25),
        (classes.digit, 15),
        (classes.symbol, 10),
    ]
    .iter()
    .filter(|(applies, _)| *applies)
    .fold(0u8, |total, (_, points)| total.saturating_add(*points));

    StrengthScore(points.min(StrengthScore::MAX))
}

/// Coarse banding of a [`StrengthScore`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    /// Band for a raw score: `< 40` weak, `< 70` medium, otherwise strong.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < MEDIUM_THRESHOLD {
            Self::Weak
        } else if score < STRONG_THRESHOLD {
            Self::Medium
        } else {
            Self::Strong
        }
    }

    /// Label shown next to the meter.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Get CSS class for styling
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
        }
    }

    /// Get color for the meter fill
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Weak => "#ef4444",   // red-500
            Self::Medium => "#eab308", // yellow-500
            Self::Strong => "#22c55e", // green-500
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(input: &str) -> u8 {
        password_strength(input).value()
    }

    #[test]
    fn test_reference_scores() {
        assert_eq!(score(""), 0);
        assert_eq!(score("abcdefg"), 0);
        assert_eq!(score("abcdefgh"), 25);
        assert_eq!(score("Abcdefgh"), 50);
        assert_eq!(score("Abcdefgh1"), 65);
        assert_eq!(score("Abcdefgh123!"), 100);
    }

    #[test]
    fn test_reference_bands() {
        assert_eq!(password_strength("abcdefgh").band(), StrengthBand::Weak);
        assert_eq!(password_strength("Abcdefgh").band(), StrengthBand::Medium);
        assert_eq!(password_strength("Abcdefgh1").band(), StrengthBand::Medium);
        assert_eq!(password_strength("Abcdefgh123!").band(), StrengthBand::Strong);
    }

    #[test]
    fn test_short_password_still_scores_character_classes() {
        // 4 chars: no length points, but mixed case + digit + symbol
        assert_eq!(score("aA1!"), 25 + 15 + 10);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StrengthBand::from_score(39), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_score(40), StrengthBand::Medium);
        assert_eq!(StrengthBand::from_score(69), StrengthBand::Medium);
        assert_eq!(StrengthBand::from_score(70), StrengthBand::Strong);
        assert_eq!(StrengthBand::from_score(100), StrengthBand::Strong);
    }

    #[test]
    fn test_length_counts_utf16_code_units() {
        // 7 two-byte characters are still 7 code units
        assert_eq!(password_length("ééééééé"), 7);
        assert_eq!(password_strength("ééééééé").value(), 10);

        // 4 emoji are 8 code units: length rule plus symbol rule
        assert_eq!(password_length("😀😀😀😀"), 8);
        assert_eq!(password_strength("😀😀😀😀").value(), 35);
    }

    #[test]
    fn test_character_classes() {
        let classes = CharacterClasses::of("nouppercase1");
        assert!(classes.lowercase);
        assert!(!classes.uppercase);
        assert!(classes.digit);
        assert!(!classes.symbol);
        assert!(!classes.meets_complexity());

        assert!(CharacterClasses::of("Upper1lower").meets_complexity());
    }

    #[test]
    fn test_band_display() {
        assert_eq!(StrengthBand::Medium.to_string(), "Medium");
        assert_eq!(StrengthBand::Strong.css_class(), "strength-strong");
    }
}

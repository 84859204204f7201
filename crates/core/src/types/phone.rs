//! Phone number type with a pluggable validation policy.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty after trimming.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains too few digits for the structured policy.
    #[error("phone number must contain at least {min} digits")]
    TooFewDigits {
        /// Minimum required digit count.
        min: usize,
    },
    /// The input contains a character the structured policy rejects.
    #[error("phone number contains an invalid character: {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
}

/// How strictly phone fields are checked.
///
/// Profile forms historically accepted any non-empty phone text, so
/// [`PhonePolicy::Lenient`] is the default. [`PhonePolicy::Structured`] is
/// available for deployments that want digit-based checking instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
    /// Any non-empty string after trimming.
    #[default]
    Lenient,
    /// Digits plus common separators, with a minimum digit count.
    Structured,
}

impl PhonePolicy {
    /// Minimum digit count enforced by the structured policy.
    pub const MIN_DIGITS: usize = 7;

    /// Check a raw string against this policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, or (structured only) contains
    /// characters other than digits and `+ - ( ) . space`, or carries fewer
    /// than [`Self::MIN_DIGITS`] digits.
    pub fn check(self, s: &str) -> Result<(), PhoneError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        if self == Self::Lenient {
            return Ok(());
        }

        let mut digits = 0_usize;
        for c in trimmed.chars() {
            match c {
                '0'..='9' => digits += 1,
                '+' | '-' | '(' | ')' | '.' | ' ' => {}
                other => return Err(PhoneError::InvalidCharacter { found: other }),
            }
        }

        if digits < Self::MIN_DIGITS {
            return Err(PhoneError::TooFewDigits {
                min: Self::MIN_DIGITS,
            });
        }

        Ok(())
    }
}

/// A phone number validated against a [`PhonePolicy`].
///
/// The trimmed input is stored verbatim; no normalization beyond trimming is
/// applied, so whatever separators the user typed survive round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a `PhoneNumber` with the default (lenient) policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        Self::parse_with(s, PhonePolicy::default())
    }

    /// Parse a `PhoneNumber` with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns whatever [`PhonePolicy::check`] reports for the input.
    pub fn parse_with(s: &str, policy: PhonePolicy) -> Result<Self, PhoneError> {
        policy.check(s)?;
        Ok(Self(s.trim().to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_accepts_any_nonempty() {
        assert!(PhoneNumber::parse("555-0100").is_ok());
        assert!(PhoneNumber::parse("call reception").is_ok());
        assert!(PhoneNumber::parse("+1 (415) 555-0100").is_ok());
    }

    #[test]
    fn test_lenient_rejects_empty() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(PhoneNumber::parse("   "), Err(PhoneError::Empty)));
    }

    #[test]
    fn test_parse_trims() {
        let phone = PhoneNumber::parse("  555-0100  ").unwrap();
        assert_eq!(phone.as_str(), "555-0100");
    }

    #[test]
    fn test_structured_accepts_separators() {
        assert!(PhoneNumber::parse_with("+1 (415) 555-0100", PhonePolicy::Structured).is_ok());
        assert!(PhoneNumber::parse_with("415.555.0100", PhonePolicy::Structured).is_ok());
    }

    #[test]
    fn test_structured_rejects_letters() {
        assert!(matches!(
            PhoneNumber::parse_with("call reception", PhonePolicy::Structured),
            Err(PhoneError::InvalidCharacter { found: 'c' })
        ));
    }

    #[test]
    fn test_structured_rejects_too_few_digits() {
        assert!(matches!(
            PhoneNumber::parse_with("555-01", PhonePolicy::Structured),
            Err(PhoneError::TooFewDigits { min: 7 })
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let phone = PhoneNumber::parse("555-0100").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"555-0100\"");

        let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, phone);
    }
}

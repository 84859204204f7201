//! Atomic validation rules.
//!
//! A [`Rule`] checks a single raw input string and yields the message shown
//! next to the field. Rules never mutate the value they inspect; coercion for
//! submission happens separately in [`sync`](crate::sync).

use corpdir_core::{Email, PhoneError, PhoneNumber, PhonePolicy, WebUrl};

pub(crate) const INVALID_EMAIL: &str = "Invalid email address";
pub(crate) const PHONE_REQUIRED: &str = "Phone number is required";
pub(crate) const PHONE_INVALID: &str = "Invalid phone number";
pub(crate) const INVALID_EMPLOYEE_COUNT: &str = "Invalid number of employees";

/// A single check applied to one field's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The trimmed value must be non-empty.
    Required { message: &'static str },
    /// The value must parse as an email address.
    Email,
    /// Empty passes; anything else must parse as an http(s) URL.
    OptionalUrl { message: &'static str },
    /// Empty passes (it counts as zero); anything else must parse as a
    /// non-negative whole number.
    NonNegativeInt,
    /// The value must be a phone number acceptable under the active
    /// [`PhonePolicy`].
    Phone,
}

impl Rule {
    /// Runs the rule against `raw`, returning the error message on failure.
    #[must_use]
    pub fn check(self, raw: &str, policy: PhonePolicy) -> Option<&'static str> {
        let trimmed = raw.trim();
        match self {
            Self::Required { message } => trimmed.is_empty().then_some(message),
            Self::Email => Email::parse(trimmed).err().map(|_| INVALID_EMAIL),
            Self::OptionalUrl { message } => {
                if trimmed.is_empty() {
                    None
                } else {
                    WebUrl::parse(trimmed).err().map(|_| message)
                }
            }
            Self::NonNegativeInt => coerce_count(raw).map_or(Some(INVALID_EMPLOYEE_COUNT), |_| None),
            Self::Phone => match PhoneNumber::parse_with(trimmed, policy) {
                Ok(_) => None,
                Err(PhoneError::Empty) => Some(PHONE_REQUIRED),
                Err(_) => Some(PHONE_INVALID),
            },
        }
    }
}

/// Interprets a raw employee-count field as a number of people.
///
/// An empty or whitespace-only field counts as zero, matching how the form
/// derives the total before the user has typed anything. Anything else must
/// parse as a non-negative whole number.
#[must_use]
pub fn coerce_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<u32>().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const REQUIRED: Rule = Rule::Required {
        message: "Legal name is required",
    };

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(
            REQUIRED.check("", PhonePolicy::Lenient),
            Some("Legal name is required")
        );
        assert_eq!(
            REQUIRED.check("   ", PhonePolicy::Lenient),
            Some("Legal name is required")
        );
        assert_eq!(REQUIRED.check("Acme Inc.", PhonePolicy::Lenient), None);
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(Rule::Email.check("ceo@acme.com", PhonePolicy::Lenient), None);
        assert_eq!(
            Rule::Email.check("not-an-email", PhonePolicy::Lenient),
            Some(INVALID_EMAIL)
        );
        // An empty email field reports the format message, not a missing-field one.
        assert_eq!(Rule::Email.check("", PhonePolicy::Lenient), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_optional_url_passes_empty() {
        let rule = Rule::OptionalUrl {
            message: "Invalid website URL",
        };
        assert_eq!(rule.check("", PhonePolicy::Lenient), None);
        assert_eq!(rule.check("  ", PhonePolicy::Lenient), None);
        assert_eq!(rule.check("https://acme.com", PhonePolicy::Lenient), None);
        assert_eq!(
            rule.check("acme dot com", PhonePolicy::Lenient),
            Some("Invalid website URL")
        );
        assert_eq!(
            rule.check("ftp://acme.com", PhonePolicy::Lenient),
            Some("Invalid website URL")
        );
    }

    #[test]
    fn test_non_negative_int_rule() {
        assert_eq!(Rule::NonNegativeInt.check("", PhonePolicy::Lenient), None);
        assert_eq!(Rule::NonNegativeInt.check("12", PhonePolicy::Lenient), None);
        assert_eq!(
            Rule::NonNegativeInt.check("-3", PhonePolicy::Lenient),
            Some(INVALID_EMPLOYEE_COUNT)
        );
        assert_eq!(
            Rule::NonNegativeInt.check("3.5", PhonePolicy::Lenient),
            Some(INVALID_EMPLOYEE_COUNT)
        );
        assert_eq!(
            Rule::NonNegativeInt.check("a few", PhonePolicy::Lenient),
            Some(INVALID_EMPLOYEE_COUNT)
        );
    }

    #[test]
    fn test_phone_rule_lenient_only_requires_presence() {
        assert_eq!(Rule::Phone.check("", PhonePolicy::Lenient), Some(PHONE_REQUIRED));
        assert_eq!(Rule::Phone.check("call me", PhonePolicy::Lenient), None);
        assert_eq!(Rule::Phone.check("+1 555 0100", PhonePolicy::Lenient), None);
    }

    #[test]
    fn test_phone_rule_structured_checks_shape() {
        assert_eq!(
            Rule::Phone.check("", PhonePolicy::Structured),
            Some(PHONE_REQUIRED)
        );
        assert_eq!(
            Rule::Phone.check("call me", PhonePolicy::Structured),
            Some(PHONE_INVALID)
        );
        assert_eq!(Rule::Phone.check("+1 555 010 0000", PhonePolicy::Structured), None);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count(""), Some(0));
        assert_eq!(coerce_count("  "), Some(0));
        assert_eq!(coerce_count("0"), Some(0));
        assert_eq!(coerce_count(" 41 "), Some(41));
        assert_eq!(coerce_count("-1"), None);
        assert_eq!(coerce_count("1.5"), None);
        assert_eq!(coerce_count("many"), None);
    }
}

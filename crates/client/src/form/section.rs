//! The fixed section sequence of the profile form.

use serde::{Deserialize, Serialize};

/// One step of the profile wizard, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Company,
    Employees,
    Address,
    Contact,
}

impl Section {
    /// Every section in wizard order.
    pub const ALL: [Self; 4] = [Self::Company, Self::Employees, Self::Address, Self::Contact];

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Employees => "Employees",
            Self::Address => "Address",
            Self::Contact => "Contact",
        }
    }

    /// Zero-based position in the wizard.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Company => 0,
            Self::Employees => 1,
            Self::Address => 2,
            Self::Contact => 3,
        }
    }

    /// The section after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Company => Some(Self::Employees),
            Self::Employees => Some(Self::Address),
            Self::Address => Some(Self::Contact),
            Self::Contact => None,
        }
    }

    /// The section before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Company => None,
            Self::Employees => Some(Self::Company),
            Self::Address => Some(Self::Employees),
            Self::Contact => Some(Self::Address),
        }
    }

    /// The entry section of the wizard.
    #[must_use]
    pub const fn first() -> Self {
        Self::Company
    }

    /// True for the section that carries the submit action.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Contact)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_company_to_contact() {
        assert_eq!(Section::first(), Section::Company);
        assert_eq!(Section::Company.next(), Some(Section::Employees));
        assert_eq!(Section::Employees.next(), Some(Section::Address));
        assert_eq!(Section::Address.next(), Some(Section::Contact));
        assert_eq!(Section::Contact.next(), None);
    }

    #[test]
    fn test_previous_mirrors_next() {
        for section in Section::ALL {
            if let Some(next) = section.next() {
                assert_eq!(next.previous(), Some(section));
            }
        }
        assert_eq!(Section::Company.previous(), None);
    }

    #[test]
    fn test_indexes_match_all_order() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_only_contact_is_last() {
        assert!(Section::Contact.is_last());
        assert!(!Section::Company.is_last());
        assert!(!Section::Employees.is_last());
        assert!(!Section::Address.is_last());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Section::Employees).unwrap();
        assert_eq!(json, "\"employees\"");
        let parsed: Section = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(parsed, Section::Contact);
    }
}

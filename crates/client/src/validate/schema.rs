//! The field schema of the company profile form.
//!
//! Every editable field is one [`Field`] variant. Declaration order is the
//! order fields appear on screen, so ordering comparisons ([`Ord`]) and
//! iteration over [`Field::ALL`] both follow the form layout. That ordering
//! is what decides which field receives focus when a section fails
//! validation.

use crate::form::Section;

use super::rules::Rule;

/// One editable field of the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    // ==================== Company ====================
    LogoKey,
    LegalName,
    CompanyEmail,
    CompanyPhone,
    Industry,
    StateOfIncorporation,
    Website,
    Fax,
    FacebookPage,
    LinkedInPage,
    // ==================== Employees ====================
    FullTimeEmployees,
    PartTimeEmployees,
    TotalEmployees,
    OtherInformation,
    // ==================== Address ====================
    RegisteredStreet,
    RegisteredCity,
    RegisteredState,
    RegisteredCountry,
    RegisteredZip,
    MailingDiffers,
    MailingStreet,
    MailingCity,
    MailingState,
    MailingCountry,
    MailingZip,
    // ==================== Contact ====================
    ContactFirstName,
    ContactLastName,
    ContactEmail,
    ContactPhone,
}

impl Field {
    /// Every field, in form layout order.
    pub const ALL: [Self; 29] = [
        Self::LogoKey,
        Self::LegalName,
        Self::CompanyEmail,
        Self::CompanyPhone,
        Self::Industry,
        Self::StateOfIncorporation,
        Self::Website,
        Self::Fax,
        Self::FacebookPage,
        Self::LinkedInPage,
        Self::FullTimeEmployees,
        Self::PartTimeEmployees,
        Self::TotalEmployees,
        Self::OtherInformation,
        Self::RegisteredStreet,
        Self::RegisteredCity,
        Self::RegisteredState,
        Self::RegisteredCountry,
        Self::RegisteredZip,
        Self::MailingDiffers,
        Self::MailingStreet,
        Self::MailingCity,
        Self::MailingState,
        Self::MailingCountry,
        Self::MailingZip,
        Self::ContactFirstName,
        Self::ContactLastName,
        Self::ContactEmail,
        Self::ContactPhone,
    ];

    /// The wizard section the field belongs to.
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::LogoKey
            | Self::LegalName
            | Self::CompanyEmail
            | Self::CompanyPhone
            | Self::Industry
            | Self::StateOfIncorporation
            | Self::Website
            | Self::Fax
            | Self::FacebookPage
            | Self::LinkedInPage => Section::Company,
            Self::FullTimeEmployees
            | Self::PartTimeEmployees
            | Self::TotalEmployees
            | Self::OtherInformation => Section::Employees,
            Self::RegisteredStreet
            | Self::RegisteredCity
            | Self::RegisteredState
            | Self::RegisteredCountry
            | Self::RegisteredZip
            | Self::MailingDiffers
            | Self::MailingStreet
            | Self::MailingCity
            | Self::MailingState
            | Self::MailingCountry
            | Self::MailingZip => Section::Address,
            Self::ContactFirstName
            | Self::ContactLastName
            | Self::ContactEmail
            | Self::ContactPhone => Section::Contact,
        }
    }

    /// Dotted wire-format path of the field, as the backend names it.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::LogoKey => "logoS3Key",
            Self::LegalName => "legalName",
            Self::CompanyEmail => "email",
            Self::CompanyPhone => "phone",
            Self::Industry => "industry",
            Self::StateOfIncorporation => "stateOfIncorporation",
            Self::Website => "website",
            Self::Fax => "fax",
            Self::FacebookPage => "facebookCompanyPage",
            Self::LinkedInPage => "linkedInCompanyPage",
            Self::FullTimeEmployees => "numberOfFullTimeEmployees",
            Self::PartTimeEmployees => "numberOfPartTimeEmployees",
            Self::TotalEmployees => "totalNumberOfEmployees",
            Self::OtherInformation => "otherInformation",
            Self::RegisteredStreet => "registeredAddress.street",
            Self::RegisteredCity => "registeredAddress.city",
            Self::RegisteredState => "registeredAddress.state",
            Self::RegisteredCountry => "registeredAddress.country",
            Self::RegisteredZip => "registeredAddress.zipCode",
            Self::MailingDiffers => "isMailingAddressDifferentFromRegisteredAddress",
            Self::MailingStreet => "mailingAddress.street",
            Self::MailingCity => "mailingAddress.city",
            Self::MailingState => "mailingAddress.state",
            Self::MailingCountry => "mailingAddress.country",
            Self::MailingZip => "mailingAddress.zipCode",
            Self::ContactFirstName => "primaryContactPerson.firstName",
            Self::ContactLastName => "primaryContactPerson.lastName",
            Self::ContactEmail => "primaryContactPerson.email",
            Self::ContactPhone => "primaryContactPerson.phone",
        }
    }

    /// The checks applied to the field's raw text.
    ///
    /// Fields with an empty slice are always valid: the logo, fax and
    /// free-text notes are optional, and the mailing toggle is a boolean
    /// with no text to check.
    #[must_use]
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Self::LogoKey | Self::Fax | Self::OtherInformation | Self::MailingDiffers => &[],
            Self::LegalName => &[Rule::Required {
                message: "Legal name is required",
            }],
            Self::CompanyEmail | Self::ContactEmail => &[Rule::Email],
            Self::CompanyPhone | Self::ContactPhone => &[Rule::Phone],
            Self::Industry => &[Rule::Required {
                message: "Industry is required",
            }],
            Self::StateOfIncorporation => &[Rule::Required {
                message: "State of incorporation is required",
            }],
            Self::Website => &[Rule::OptionalUrl {
                message: "Invalid website URL",
            }],
            Self::FacebookPage => &[Rule::OptionalUrl {
                message: "Invalid Facebook URL",
            }],
            Self::LinkedInPage => &[Rule::OptionalUrl {
                message: "Invalid LinkedIn URL",
            }],
            Self::FullTimeEmployees | Self::PartTimeEmployees | Self::TotalEmployees => {
                &[Rule::NonNegativeInt]
            }
            Self::RegisteredStreet | Self::MailingStreet => &[Rule::Required {
                message: "Street is required",
            }],
            Self::RegisteredCity | Self::MailingCity => &[Rule::Required {
                message: "City is required",
            }],
            Self::RegisteredState | Self::MailingState => &[Rule::Required {
                message: "State is required",
            }],
            Self::RegisteredCountry | Self::MailingCountry => &[Rule::Required {
                message: "Country is required",
            }],
            Self::RegisteredZip | Self::MailingZip => &[Rule::Required {
                message: "Zip code is required",
            }],
            Self::ContactFirstName => &[Rule::Required {
                message: "First name is required",
            }],
            Self::ContactLastName => &[Rule::Required {
                message: "Last name is required",
            }],
        }
    }

    /// True for the mailing address detail fields, which are only checked
    /// while the mailing address is marked as different from the registered
    /// one.
    #[must_use]
    pub const fn is_mailing_detail(self) -> bool {
        matches!(
            self,
            Self::MailingStreet
                | Self::MailingCity
                | Self::MailingState
                | Self::MailingCountry
                | Self::MailingZip
        )
    }
}

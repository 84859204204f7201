//! Raw, unvalidated form state.
//!
//! Every field is kept as the text the user typed, including the employee
//! counts; coercion to typed values happens at validation and submission
//! time. The serialized form of [`FormValues`] is the draft document, so the
//! wire names here must stay stable.

use corpdir_core::{Address, CompanyRecord, ContactPerson};
use serde::{Deserialize, Serialize};

use crate::validate::{Field, coerce_count};

/// Raw text of one address block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressValues {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl From<&Address> for AddressValues {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
            zip_code: address.zip_code.clone(),
        }
    }
}

/// Raw text of the primary contact block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<&ContactPerson> for ContactValues {
    fn from(contact: &ContactPerson) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// Everything the user has typed into the form, keyed by [`Field`].
///
/// The total employee count is derived, never edited: changing either the
/// full-time or part-time count recomputes it, and writes addressed directly
/// at the total are ignored. Unparseable counts contribute zero to the total
/// while they remain invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    legal_name: String,
    email: String,
    phone: String,
    fax: String,
    website: String,
    industry: String,
    state_of_incorporation: String,
    number_of_full_time_employees: String,
    number_of_part_time_employees: String,
    total_number_of_employees: String,
    facebook_company_page: String,
    linked_in_company_page: String,
    logo_s3_key: String,
    other_information: String,
    is_mailing_address_different_from_registered_address: bool,
    registered_address: AddressValues,
    mailing_address: AddressValues,
    primary_contact_person: ContactValues,
}

impl FormValues {
    /// Seeds the form from an existing record for editing.
    ///
    /// Numbers become their decimal text, absent optionals become empty
    /// strings, and a record without a distinct mailing address gets blank
    /// mailing fields behind a cleared toggle.
    #[must_use]
    pub fn from_record(record: &CompanyRecord) -> Self {
        Self {
            legal_name: record.legal_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            fax: record.fax.clone().unwrap_or_default(),
            website: record.website.clone().unwrap_or_default(),
            industry: record.industry.clone(),
            state_of_incorporation: record.state_of_incorporation.clone(),
            number_of_full_time_employees: record.number_of_full_time_employees.to_string(),
            number_of_part_time_employees: record.number_of_part_time_employees.to_string(),
            total_number_of_employees: record.total_number_of_employees.to_string(),
            facebook_company_page: record.facebook_company_page.clone().unwrap_or_default(),
            linked_in_company_page: record.linked_in_company_page.clone().unwrap_or_default(),
            logo_s3_key: record
                .logo_s3_key
                .as_ref()
                .map(|key| key.as_str().to_owned())
                .unwrap_or_default(),
            other_information: record.other_information.clone().unwrap_or_default(),
            is_mailing_address_different_from_registered_address: record
                .is_mailing_address_different_from_registered_address,
            registered_address: AddressValues::from(&record.registered_address),
            mailing_address: record
                .mailing_address
                .as_ref()
                .map(AddressValues::from)
                .unwrap_or_default(),
            primary_contact_person: ContactValues::from(&record.primary_contact_person),
        }
    }

    /// The raw text of one field.
    ///
    /// The mailing toggle is a boolean with no text; it reads as empty here
    /// and is inspected through [`Self::mailing_differs`] instead.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::LogoKey => &self.logo_s3_key,
            Field::LegalName => &self.legal_name,
            Field::CompanyEmail => &self.email,
            Field::CompanyPhone => &self.phone,
            Field::Industry => &self.industry,
            Field::StateOfIncorporation => &self.state_of_incorporation,
            Field::Website => &self.website,
            Field::Fax => &self.fax,
            Field::FacebookPage => &self.facebook_company_page,
            Field::LinkedInPage => &self.linked_in_company_page,
            Field::FullTimeEmployees => &self.number_of_full_time_employees,
            Field::PartTimeEmployees => &self.number_of_part_time_employees,
            Field::TotalEmployees => &self.total_number_of_employees,
            Field::OtherInformation => &self.other_information,
            Field::RegisteredStreet => &self.registered_address.street,
            Field::RegisteredCity => &self.registered_address.city,
            Field::RegisteredState => &self.registered_address.state,
            Field::RegisteredCountry => &self.registered_address.country,
            Field::RegisteredZip => &self.registered_address.zip_code,
            Field::MailingDiffers => "",
            Field::MailingStreet => &self.mailing_address.street,
            Field::MailingCity => &self.mailing_address.city,
            Field::MailingState => &self.mailing_address.state,
            Field::MailingCountry => &self.mailing_address.country,
            Field::MailingZip => &self.mailing_address.zip_code,
            Field::ContactFirstName => &self.primary_contact_person.first_name,
            Field::ContactLastName => &self.primary_contact_person.last_name,
            Field::ContactEmail => &self.primary_contact_person.email,
            Field::ContactPhone => &self.primary_contact_person.phone,
        }
    }

    /// Overwrites the raw text of one field.
    ///
    /// Writes to the derived total and to the mailing toggle are ignored;
    /// the toggle is flipped with [`Self::set_mailing_differs`].
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::LogoKey => self.logo_s3_key = value,
            Field::LegalName => self.legal_name = value,
            Field::CompanyEmail => self.email = value,
            Field::CompanyPhone => self.phone = value,
            Field::Industry => self.industry = value,
            Field::StateOfIncorporation => self.state_of_incorporation = value,
            Field::Website => self.website = value,
            Field::Fax => self.fax = value,
            Field::FacebookPage => self.facebook_company_page = value,
            Field::LinkedInPage => self.linked_in_company_page = value,
            Field::FullTimeEmployees => {
                self.number_of_full_time_employees = value;
                self.recompute_total();
            }
            Field::PartTimeEmployees => {
                self.number_of_part_time_employees = value;
                self.recompute_total();
            }
            Field::TotalEmployees | Field::MailingDiffers => {}
            Field::OtherInformation => self.other_information = value,
            Field::RegisteredStreet => self.registered_address.street = value,
            Field::RegisteredCity => self.registered_address.city = value,
            Field::RegisteredState => self.registered_address.state = value,
            Field::RegisteredCountry => self.registered_address.country = value,
            Field::RegisteredZip => self.registered_address.zip_code = value,
            Field::MailingStreet => self.mailing_address.street = value,
            Field::MailingCity => self.mailing_address.city = value,
            Field::MailingState => self.mailing_address.state = value,
            Field::MailingCountry => self.mailing_address.country = value,
            Field::MailingZip => self.mailing_address.zip_code = value,
            Field::ContactFirstName => self.primary_contact_person.first_name = value,
            Field::ContactLastName => self.primary_contact_person.last_name = value,
            Field::ContactEmail => self.primary_contact_person.email = value,
            Field::ContactPhone => self.primary_contact_person.phone = value,
        }
    }

    /// Whether the mailing address is marked as different from the
    /// registered one.
    #[must_use]
    pub const fn mailing_differs(&self) -> bool {
        self.is_mailing_address_different_from_registered_address
    }

    pub fn set_mailing_differs(&mut self, differs: bool) {
        self.is_mailing_address_different_from_registered_address = differs;
    }

    /// The raw registered address block.
    #[must_use]
    pub const fn registered_address(&self) -> &AddressValues {
        &self.registered_address
    }

    /// The raw mailing address block, meaningful only while
    /// [`Self::mailing_differs`] is true.
    #[must_use]
    pub const fn mailing_address(&self) -> &AddressValues {
        &self.mailing_address
    }

    /// The raw primary contact block.
    #[must_use]
    pub const fn primary_contact(&self) -> &ContactValues {
        &self.primary_contact_person
    }

    fn recompute_total(&mut self) {
        let full = coerce_count(&self.number_of_full_time_employees).unwrap_or(0);
        let part = coerce_count(&self.number_of_part_time_employees).unwrap_or(0);
        self.total_number_of_employees = full.saturating_add(part).to_string();
    }
}

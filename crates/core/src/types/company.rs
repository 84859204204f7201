//! Company profile record and its submission shape.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::contact::ContactPerson;
use super::id::{CompanyId, StorageKey};

/// A company profile as the backend returns it.
///
/// Field names serialize in the backend's camelCase wire format; the local
/// list cache stores the same shape. All free-text fields stay plain strings
/// because the backend is the source of truth for persisted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub legal_name: String,
    pub email: String,
    pub phone: String,
    pub fax: Option<String>,
    pub website: Option<String>,
    pub industry: String,
    pub state_of_incorporation: String,
    pub number_of_full_time_employees: u32,
    pub number_of_part_time_employees: u32,
    pub total_number_of_employees: u32,
    pub facebook_company_page: Option<String>,
    pub linked_in_company_page: Option<String>,
    pub logo_s3_key: Option<StorageKey>,
    pub other_information: Option<String>,
    pub is_mailing_address_different_from_registered_address: bool,
    pub registered_address: Address,
    /// Absent when the backend never stored a distinct mailing address.
    pub mailing_address: Option<Address>,
    pub primary_contact_person: ContactPerson,
}

/// The id-less shape submitted to create and update operations.
///
/// A create submission never carries an identifier, and an update passes the
/// identifier beside the input rather than inside it. Keeping `id` off this
/// type enforces both.
///
/// `mailing_address` is always present on the way out: when the mailing flag
/// is false the caller substitutes a copy of the registered address before
/// building this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub legal_name: String,
    pub email: String,
    pub phone: String,
    pub fax: Option<String>,
    pub website: Option<String>,
    pub industry: String,
    pub state_of_incorporation: String,
    pub number_of_full_time_employees: u32,
    pub number_of_part_time_employees: u32,
    pub total_number_of_employees: u32,
    pub facebook_company_page: Option<String>,
    pub linked_in_company_page: Option<String>,
    pub logo_s3_key: Option<StorageKey>,
    pub other_information: Option<String>,
    pub is_mailing_address_different_from_registered_address: bool,
    pub registered_address: Address,
    pub mailing_address: Address,
    pub primary_contact_person: ContactPerson,
}

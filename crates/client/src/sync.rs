//! Submission of the profile form to the registry.
//!
//! [`build_input`] turns raw form text into the typed mutation input;
//! [`RecordSync`] validates, calls the backend, and reconciles the local
//! list cache and draft afterwards. Cache and draft housekeeping never fails
//! a submission that the backend accepted.

use std::sync::Arc;

use corpdir_core::{Address, CompanyId, CompanyInput, CompanyRecord, ContactPerson, PhonePolicy, StorageKey};
use thiserror::Error;
use tracing::{instrument, warn};

use crate::api::{ApiError, CompanyApi};
use crate::cache::CompanyListCache;
use crate::form::{AddressValues, DraftStore, FormValues};
use crate::storage::KeyValueStore;
use crate::validate::{Field, ValidationReport, coerce_count, validate_record};

/// Where the caller should send the user after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The company list, after creating a record.
    CompanyList,
    /// The detail view of one company, after updating it.
    CompanyDetail(CompanyId),
}

/// A successful submission: the stored record and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: CompanyRecord,
    pub navigation: Navigation,
}

/// Why a submission did not reach the backend, or why the backend refused it.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form has invalid fields; nothing was sent.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationReport),

    /// The backend call failed. Local state is untouched.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Builds the mutation input from raw form text.
///
/// Counts coerce the way the form derives its total: unparseable or empty
/// text contributes zero, and the total is recomputed from the two parts.
/// Empty optional fields become `None` so they serialize as explicit nulls,
/// and a form whose mailing address matches the registered one submits a
/// copy of the registered address, ignoring whatever stale text the hidden
/// mailing fields still hold.
#[must_use]
pub fn build_input(values: &FormValues) -> CompanyInput {
    let full_time = coerce_count(values.text(Field::FullTimeEmployees)).unwrap_or(0);
    let part_time = coerce_count(values.text(Field::PartTimeEmployees)).unwrap_or(0);

    let registered_address = address_from(values.registered_address());
    let mailing_address = if values.mailing_differs() {
        address_from(values.mailing_address())
    } else {
        registered_address.clone()
    };

    CompanyInput {
        legal_name: values.text(Field::LegalName).to_owned(),
        email: values.text(Field::CompanyEmail).to_owned(),
        phone: values.text(Field::CompanyPhone).to_owned(),
        fax: optional(values.text(Field::Fax)),
        website: optional(values.text(Field::Website)),
        industry: values.text(Field::Industry).to_owned(),
        state_of_incorporation: values.text(Field::StateOfIncorporation).to_owned(),
        number_of_full_time_employees: full_time,
        number_of_part_time_employees: part_time,
        total_number_of_employees: full_time.saturating_add(part_time),
        facebook_company_page: optional(values.text(Field::FacebookPage)),
        linked_in_company_page: optional(values.text(Field::LinkedInPage)),
        logo_s3_key: optional(values.text(Field::LogoKey)).map(StorageKey::new),
        other_information: optional(values.text(Field::OtherInformation)),
        is_mailing_address_different_from_registered_address: values.mailing_differs(),
        registered_address,
        mailing_address,
        primary_contact_person: ContactPerson {
            first_name: values.primary_contact().first_name.clone(),
            last_name: values.primary_contact().last_name.clone(),
            email: values.primary_contact().email.clone(),
            phone: values.primary_contact().phone.clone(),
        },
    }
}

fn optional(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

fn address_from(values: &AddressValues) -> Address {
    Address {
        street: values.street.clone(),
        city: values.city.clone(),
        state: values.state.clone(),
        country: values.country.clone(),
        zip_code: values.zip_code.clone(),
    }
}

/// Validates, submits and reconciles one profile form.
#[derive(Clone)]
pub struct RecordSync {
    api: Arc<dyn CompanyApi>,
    cache: CompanyListCache,
    draft: DraftStore,
    phone_policy: PhonePolicy,
}

impl RecordSync {
    #[must_use]
    pub fn new(api: Arc<dyn CompanyApi>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            cache: CompanyListCache::new(Arc::clone(&store)),
            draft: DraftStore::new(store),
            phone_policy: PhonePolicy::default(),
        }
    }

    /// Replaces the phone validation policy.
    #[must_use]
    pub fn with_phone_policy(mut self, policy: PhonePolicy) -> Self {
        self.phone_policy = policy;
        self
    }

    /// Submits a new company.
    ///
    /// On success the record joins the list cache, the draft slot is
    /// cleared, and the caller is pointed at the company list. Cache and
    /// draft failures are logged and swallowed; the backend has already
    /// accepted the record.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] when the form fails validation and
    /// [`SubmitError::Api`] when the backend refuses the mutation. Neither
    /// touches the cache or the draft.
    #[instrument(skip(self, values))]
    pub async fn submit_create(&self, values: &FormValues) -> Result<SubmitOutcome, SubmitError> {
        let report = validate_record(values, self.phone_policy);
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }

        let input = build_input(values);
        let record = self.api.create_company(&input).await?;

        if let Err(error) = self.cache.append(&record) {
            warn!(%error, company_id = %record.id, "created company but could not extend the list cache");
        }
        if let Err(error) = self.draft.discard() {
            warn!(%error, "created company but could not clear the draft");
        }

        Ok(SubmitOutcome {
            record,
            navigation: Navigation::CompanyList,
        })
    }

    /// Submits changes to an existing company.
    ///
    /// On success the cached copy is replaced in place and the caller is
    /// pointed back at the company's detail view. The draft slot belongs to
    /// the create flow and is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] when the form fails validation and
    /// [`SubmitError::Api`] when the backend refuses the mutation.
    #[instrument(skip(self, values), fields(company_id = %id))]
    pub async fn submit_update(
        &self,
        id: &CompanyId,
        values: &FormValues,
    ) -> Result<SubmitOutcome, SubmitError> {
        let report = validate_record(values, self.phone_policy);
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }

        let input = build_input(values);
        let record = self.api.update_company(id, &input).await?;

        if let Err(error) = self.cache.upsert(&record) {
            warn!(%error, company_id = %record.id, "updated company but could not refresh the list cache");
        }

        let navigation = Navigation::CompanyDetail(record.id.clone());
        Ok(SubmitOutcome { record, navigation })
    }
}

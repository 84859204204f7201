//! Integration tests for Corpdir.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p corpdir-integration-tests
//! ```
//!
//! No external services are needed: the suites drive the profile flows
//! against [`FakeCompanyApi`], an in-memory registry that records every call
//! and can be told to fail on demand, plus the in-memory key-value store
//! from the client crate.
//!
//! # Test Suites
//!
//! - `wizard_flow` - section navigation, validation gating, drafts
//! - `submit_flow` - create/update submission and cache reconciliation
//! - `upload_flow` - applying the logo handshake end to end
//! - `session_flow` - the stored session document

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use corpdir_client::api::{ApiError, CompanyApi, GraphQLError, SignedUrl};
use corpdir_client::validate::Field;
use corpdir_client::{FormValues, KeyValueStore, MemoryStore, StorageError};
use corpdir_core::{Address, CompanyId, CompanyInput, CompanyRecord, ContactPerson, StorageKey};

// ============================================================================
// Fake registry backend
// ============================================================================

#[derive(Default)]
struct FakeState {
    companies: HashMap<String, CompanyRecord>,
    next_id: Option<String>,
    created: u64,
    fail_create: bool,
    fail_update: bool,
    fail_grant: bool,
    fail_put: bool,
    fail_download: bool,
    fetch_calls: usize,
    create_calls: usize,
    update_calls: usize,
    grant_calls: usize,
    put_calls: usize,
    download_calls: usize,
}

/// An in-memory stand-in for the registry API.
///
/// Mutations store real records, so tests can check what the backend ended
/// up holding. Every operation counts its calls, and each can be switched to
/// fail, which is how the suites prove that local state stays untouched when
/// the network lets the flows down.
#[derive(Default)]
pub struct FakeCompanyApi {
    state: Mutex<FakeState>,
}

impl FakeCompanyApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seeds a record as if it had been created earlier.
    pub fn seed(&self, record: CompanyRecord) {
        self.lock()
            .companies
            .insert(record.id.as_str().to_owned(), record);
    }

    /// Forces the next created record to get this id.
    pub fn assign_next_id(&self, id: impl Into<String>) {
        self.lock().next_id = Some(id.into());
    }

    /// The record the backend currently holds for `id`.
    #[must_use]
    pub fn stored(&self, id: &str) -> Option<CompanyRecord> {
        self.lock().companies.get(id).cloned()
    }

    pub fn fail_create(&self, fail: bool) {
        self.lock().fail_create = fail;
    }

    pub fn fail_update(&self, fail: bool) {
        self.lock().fail_update = fail;
    }

    pub fn fail_grant(&self, fail: bool) {
        self.lock().fail_grant = fail;
    }

    pub fn fail_put(&self, fail: bool) {
        self.lock().fail_put = fail;
    }

    pub fn fail_download(&self, fail: bool) {
        self.lock().fail_download = fail;
    }

    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.lock().fetch_calls
    }

    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.lock().create_calls
    }

    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.lock().update_calls
    }

    #[must_use]
    pub fn grant_calls(&self) -> usize {
        self.lock().grant_calls
    }

    #[must_use]
    pub fn put_calls(&self) -> usize {
        self.lock().put_calls
    }

    #[must_use]
    pub fn download_calls(&self) -> usize {
        self.lock().download_calls
    }

    /// Calls of any kind since construction.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        let state = self.lock();
        state.fetch_calls
            + state.create_calls
            + state.update_calls
            + state.grant_calls
            + state.put_calls
            + state.download_calls
    }
}

fn backend_error(message: &str) -> ApiError {
    ApiError::GraphQL(vec![GraphQLError {
        message: message.to_owned(),
        locations: vec![],
        path: vec![],
    }])
}

fn record_from_input(id: &str, input: &CompanyInput) -> CompanyRecord {
    CompanyRecord {
        id: CompanyId::new(id),
        legal_name: input.legal_name.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        fax: input.fax.clone(),
        website: input.website.clone(),
        industry: input.industry.clone(),
        state_of_incorporation: input.state_of_incorporation.clone(),
        number_of_full_time_employees: input.number_of_full_time_employees,
        number_of_part_time_employees: input.number_of_part_time_employees,
        total_number_of_employees: input.total_number_of_employees,
        facebook_company_page: input.facebook_company_page.clone(),
        linked_in_company_page: input.linked_in_company_page.clone(),
        logo_s3_key: input.logo_s3_key.clone(),
        other_information: input.other_information.clone(),
        is_mailing_address_different_from_registered_address: input
            .is_mailing_address_different_from_registered_address,
        registered_address: input.registered_address.clone(),
        mailing_address: Some(input.mailing_address.clone()),
        primary_contact_person: input.primary_contact_person.clone(),
    }
}

#[async_trait]
impl CompanyApi for FakeCompanyApi {
    async fn fetch_company(&self, id: &CompanyId) -> Result<CompanyRecord, ApiError> {
        let mut state = self.lock();
        state.fetch_calls += 1;
        state
            .companies
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Company not found: {id}")))
    }

    async fn create_company(&self, input: &CompanyInput) -> Result<CompanyRecord, ApiError> {
        let mut state = self.lock();
        state.create_calls += 1;
        if state.fail_create {
            return Err(backend_error("Internal server error"));
        }
        let id = state.next_id.take().unwrap_or_else(|| {
            state.created += 1;
            format!("c-{}", state.created)
        });
        let record = record_from_input(&id, input);
        state.companies.insert(id, record.clone());
        Ok(record)
    }

    async fn update_company(
        &self,
        id: &CompanyId,
        input: &CompanyInput,
    ) -> Result<CompanyRecord, ApiError> {
        let mut state = self.lock();
        state.update_calls += 1;
        if state.fail_update {
            return Err(backend_error("Internal server error"));
        }
        if !state.companies.contains_key(id.as_str()) {
            return Err(ApiError::NotFound(format!("Company not found: {id}")));
        }
        let record = record_from_input(id.as_str(), input);
        state.companies.insert(id.as_str().to_owned(), record.clone());
        Ok(record)
    }

    async fn signed_upload_url(
        &self,
        file_name: &str,
        _content_type: &str,
    ) -> Result<SignedUrl, ApiError> {
        let mut state = self.lock();
        state.grant_calls += 1;
        if state.fail_grant {
            return Err(backend_error("Could not sign upload"));
        }
        Ok(SignedUrl {
            url: format!("https://storage.test/{file_name}?sig=up"),
            key: StorageKey::new(format!("logos/{file_name}")),
        })
    }

    async fn signed_download_url(&self, key: &StorageKey) -> Result<String, ApiError> {
        let mut state = self.lock();
        state.download_calls += 1;
        if state.fail_download {
            return Err(ApiError::NotFound(format!("No such object: {key}")));
        }
        Ok(format!("https://storage.test/{key}?sig=down"))
    }

    async fn put_object(
        &self,
        _url: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.put_calls += 1;
        if state.fail_put {
            return Err(ApiError::Transfer { status: 500 });
        }
        Ok(())
    }
}

// ============================================================================
// Flaky storage
// ============================================================================

/// A [`MemoryStore`] wrapper whose writes can be made to fail, for proving
/// that storage trouble never blocks a submission.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(io::Error::other("disk full")));
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.remove(key)
    }
}

// ============================================================================
// Builders
// ============================================================================

/// A form filled out to the point where every section validates.
#[must_use]
pub fn valid_form_values() -> FormValues {
    let mut values = FormValues::default();
    values.set_text(Field::LegalName, "Acme Inc.");
    values.set_text(Field::CompanyEmail, "info@acme.com");
    values.set_text(Field::CompanyPhone, "+1 555 0100");
    values.set_text(Field::Industry, "Aerospace");
    values.set_text(Field::StateOfIncorporation, "Delaware");
    values.set_text(Field::FullTimeEmployees, "10");
    values.set_text(Field::PartTimeEmployees, "2");
    values.set_text(Field::RegisteredStreet, "1 Rocket Rd");
    values.set_text(Field::RegisteredCity, "Hawthorne");
    values.set_text(Field::RegisteredState, "CA");
    values.set_text(Field::RegisteredCountry, "USA");
    values.set_text(Field::RegisteredZip, "90250");
    values.set_text(Field::ContactFirstName, "Ada");
    values.set_text(Field::ContactLastName, "Lovelace");
    values.set_text(Field::ContactEmail, "ada@acme.com");
    values.set_text(Field::ContactPhone, "+1 555 0101");
    values
}

/// A complete record as the backend would return it.
#[must_use]
pub fn sample_record(id: &str, legal_name: &str) -> CompanyRecord {
    CompanyRecord {
        id: CompanyId::new(id),
        legal_name: legal_name.to_owned(),
        email: "info@acme.com".to_owned(),
        phone: "+1 555 0100".to_owned(),
        fax: None,
        website: Some("https://acme.com".to_owned()),
        industry: "Aerospace".to_owned(),
        state_of_incorporation: "Delaware".to_owned(),
        number_of_full_time_employees: 10,
        number_of_part_time_employees: 2,
        total_number_of_employees: 12,
        facebook_company_page: None,
        linked_in_company_page: None,
        logo_s3_key: None,
        other_information: None,
        is_mailing_address_different_from_registered_address: false,
        registered_address: Address {
            street: "1 Rocket Rd".to_owned(),
            city: "Hawthorne".to_owned(),
            state: "CA".to_owned(),
            country: "USA".to_owned(),
            zip_code: "90250".to_owned(),
        },
        mailing_address: None,
        primary_contact_person: ContactPerson {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@acme.com".to_owned(),
            phone: "+1 555 0101".to_owned(),
        },
    }
}

/// Arc-wrapped fake with a matching `dyn CompanyApi` handle.
#[must_use]
pub fn fake_api() -> (Arc<FakeCompanyApi>, Arc<dyn CompanyApi>) {
    let fake = Arc::new(FakeCompanyApi::new());
    let api: Arc<dyn CompanyApi> = Arc::clone(&fake) as Arc<dyn CompanyApi>;
    (fake, api)
}

/// Arc-wrapped in-memory store with a matching `dyn KeyValueStore` handle.
#[must_use]
pub fn memory_store() -> (Arc<MemoryStore>, Arc<dyn KeyValueStore>) {
    let store = Arc::new(MemoryStore::default());
    let dyn_store: Arc<dyn KeyValueStore> = Arc::clone(&store) as Arc<dyn KeyValueStore>;
    (store, dyn_store)
}

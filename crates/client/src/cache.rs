//! Local cache of the company list.
//!
//! The backend is the source of truth; this list only exists so the
//! companies screen can paint without a round trip. Writers reconcile it
//! after successful mutations and tolerate every failure, because a stale
//! list is an inconvenience while a blocked submission is a bug.

use std::sync::Arc;

use corpdir_core::{CompanyId, CompanyRecord};
use tracing::warn;

use crate::storage::{KeyValueStore, StorageError, keys};

/// The cached company list, stored as one JSON array.
#[derive(Clone)]
pub struct CompanyListCache {
    store: Arc<dyn KeyValueStore>,
}

impl CompanyListCache {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Every cached record, in insertion order.
    ///
    /// A missing or unreadable list reads as empty; the next successful
    /// mutation starts rebuilding it.
    #[must_use]
    pub fn all(&self) -> Vec<CompanyRecord> {
        let raw = match self.store.get(keys::COMPANIES) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!(%error, "failed to read company list cache");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(error) => {
                warn!(%error, "company list cache is not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }

    /// One cached record by id.
    #[must_use]
    pub fn find(&self, id: &CompanyId) -> Option<CompanyRecord> {
        self.all().into_iter().find(|record| &record.id == id)
    }

    /// Adds a freshly created record to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the updated list cannot be written.
    pub fn append(&self, record: &CompanyRecord) -> Result<(), StorageError> {
        let mut records = self.all();
        records.push(record.clone());
        self.save(&records)
    }

    /// Replaces the cached record with the same id, appending instead when
    /// the list has no entry for it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the updated list cannot be written.
    pub fn upsert(&self, record: &CompanyRecord) -> Result<(), StorageError> {
        let mut records = self.all();
        match records.iter_mut().find(|cached| cached.id == record.id) {
            Some(cached) => *cached = record.clone(),
            None => records.push(record.clone()),
        }
        self.save(&records)
    }

    fn save(&self, records: &[CompanyRecord]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records)?;
        self.store.set(keys::COMPANIES, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use corpdir_core::{Address, ContactPerson};

    use crate::storage::MemoryStore;

    use super::*;

    fn record(id: &str, legal_name: &str) -> CompanyRecord {
        CompanyRecord {
            id: CompanyId::new(id),
            legal_name: legal_name.to_owned(),
            email: "info@acme.com".to_owned(),
            phone: "+1 555 0100".to_owned(),
            fax: None,
            website: None,
            industry: "Aerospace".to_owned(),
            state_of_incorporation: "Delaware".to_owned(),
            number_of_full_time_employees: 1,
            number_of_part_time_employees: 0,
            total_number_of_employees: 1,
            facebook_company_page: None,
            linked_in_company_page: None,
            logo_s3_key: None,
            other_information: None,
            is_mailing_address_different_from_registered_address: false,
            registered_address: Address::default(),
            mailing_address: None,
            primary_contact_person: ContactPerson::default(),
        }
    }

    fn cache() -> (CompanyListCache, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (
            CompanyListCache::new(Arc::clone(&store) as Arc<dyn KeyValueStore>),
            store,
        )
    }

    #[test]
    fn test_missing_list_reads_empty() {
        let (cache, _) = cache();
        assert!(cache.all().is_empty());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let (cache, _) = cache();
        cache.append(&record("c-1", "First")).unwrap();
        cache.append(&record("c-2", "Second")).unwrap();

        let names: Vec<String> = cache.all().into_iter().map(|r| r.legal_name).collect();
        assert_eq!(names, vec!["First".to_owned(), "Second".to_owned()]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let (cache, _) = cache();
        cache.append(&record("c-1", "First")).unwrap();
        cache.append(&record("c-2", "Second")).unwrap();

        cache.upsert(&record("c-1", "First, Renamed")).unwrap();

        let records = cache.all();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].legal_name, "First, Renamed");
        assert_eq!(records[1].legal_name, "Second");
    }

    #[test]
    fn test_upsert_appends_when_absent() {
        let (cache, _) = cache();
        cache.upsert(&record("c-9", "Orphan")).unwrap();
        assert_eq!(cache.all().len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let (cache, _) = cache();
        cache.append(&record("c-1", "First")).unwrap();
        assert_eq!(
            cache.find(&CompanyId::new("c-1")).map(|r| r.legal_name),
            Some("First".to_owned())
        );
        assert_eq!(cache.find(&CompanyId::new("c-404")), None);
    }

    #[test]
    fn test_corrupt_list_reads_empty_and_stays_put() {
        let (cache, store) = cache();
        store.set(keys::COMPANIES, "not json at all").unwrap();
        assert!(cache.all().is_empty());
        assert_eq!(
            store.get(keys::COMPANIES).unwrap(),
            Some("not json at all".to_owned())
        );
    }
}

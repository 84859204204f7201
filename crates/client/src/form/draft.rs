//! Durable draft of an in-progress company profile.

use std::sync::Arc;

use tracing::warn;

use crate::storage::{KeyValueStore, StorageError, keys};

use super::FormValues;

/// Persists the form under a single fixed key so an interrupted session can
/// pick up where it left off.
///
/// There is exactly one draft slot. Saving overwrites whatever was there;
/// two sessions writing concurrently resolve to the last writer.
#[derive(Clone)]
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
}

impl DraftStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Writes the current form state to the draft slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the snapshot cannot be serialized or
    /// written. Callers treat this as non-fatal; typing must keep working
    /// when the disk does not.
    pub fn save(&self, values: &FormValues) -> Result<(), StorageError> {
        let raw = serde_json::to_string(values)?;
        self.store.set(keys::DRAFT, &raw)
    }

    /// Reads the draft slot back, if a usable draft exists.
    ///
    /// A missing draft and an unreadable one are the same from the caller's
    /// point of view: the form starts blank. Corrupt payloads are logged and
    /// left in place for inspection.
    #[must_use]
    pub fn load(&self) -> Option<FormValues> {
        let raw = match self.store.get(keys::DRAFT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                warn!(%error, "failed to read draft, starting blank");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(values) => Some(values),
            Err(error) => {
                warn!(%error, "draft is not valid JSON, starting blank");
                None
            }
        }
    }

    /// Removes the draft slot. Removing an absent draft is fine.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the removal.
    pub fn discard(&self) -> Result<(), StorageError> {
        self.store.remove(keys::DRAFT)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStore;
    use crate::validate::Field;

    use super::*;

    fn draft_store() -> (DraftStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (DraftStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>), store)
    }

    #[test]
    fn test_round_trip() {
        let (draft, _) = draft_store();
        let mut values = FormValues::default();
        values.set_text(Field::LegalName, "Acme Inc.");
        values.set_text(Field::FullTimeEmployees, "7");

        draft.save(&values).unwrap();
        assert_eq!(draft.load(), Some(values));
    }

    #[test]
    fn test_load_without_draft_is_none() {
        let (draft, _) = draft_store();
        assert_eq!(draft.load(), None);
    }

    #[test]
    fn test_corrupt_draft_loads_as_none() {
        let (draft, store) = draft_store();
        store.set(keys::DRAFT, "{not json").unwrap();
        assert_eq!(draft.load(), None);
        // The corrupt payload stays put rather than being destroyed.
        assert_eq!(store.get(keys::DRAFT).unwrap(), Some("{not json".to_owned()));
    }

    #[test]
    fn test_discard_removes_draft() {
        let (draft, store) = draft_store();
        draft.save(&FormValues::default()).unwrap();
        draft.discard().unwrap();
        assert_eq!(store.get(keys::DRAFT).unwrap(), None);
        // Discarding again is not an error.
        draft.discard().unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_draft() {
        let (draft, _) = draft_store();
        let mut first = FormValues::default();
        first.set_text(Field::LegalName, "First Draft LLC");
        draft.save(&first).unwrap();

        let mut second = FormValues::default();
        second.set_text(Field::LegalName, "Second Draft LLC");
        draft.save(&second).unwrap();

        assert_eq!(draft.load(), Some(second));
    }
}

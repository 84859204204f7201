//! Logged-in flag persisted in local storage.
//!
//! This is a convenience flag, not authentication: no credentials exist
//! anywhere in the system. The stored document mirrors what the profile UI
//! shows in its header.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{KeyValueStore, StorageError, keys};

/// The stored session document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub full_name: String,
    pub is_logged_in: bool,
    pub login_time: DateTime<Utc>,
}

/// Reads and writes the session flag under the fixed `user` key.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Record a login for `full_name`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns the storage failure, if any; serialization of the session
    /// document is infallible in practice.
    pub fn login(&self, full_name: &str) -> Result<UserSession, StorageError> {
        let session = UserSession {
            full_name: full_name.trim().to_owned(),
            is_logged_in: true,
            login_time: Utc::now(),
        };
        let json = serde_json::to_string(&session)?;
        self.store.set(keys::USER, &json)?;
        Ok(session)
    }

    /// The current session, if one is stored and readable.
    ///
    /// A corrupt session document is logged and treated as no session; it
    /// never escalates.
    #[must_use]
    pub fn current(&self) -> Option<UserSession> {
        let raw = match self.store.get(keys::USER) {
            Ok(value) => value?,
            Err(e) => {
                warn!(error = %e, "failed to read stored session");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "stored session is corrupt, ignoring");
                None
            }
        }
    }

    /// True when a stored session says logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current().is_some_and(|s| s.is_logged_in)
    }

    /// Remove any stored session.
    ///
    /// # Errors
    ///
    /// Returns the storage failure, if any.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(keys::USER)
    }
}

//! Durable local key-value storage.
//!
//! The engine persists three things between runs: the in-progress draft, the
//! cached company list, and the logged-in flag. All three go through the
//! injectable [`KeyValueStore`] port so any key-value mechanism can back
//! them. Two implementations ship here: [`MemoryStore`] for tests and
//! ephemeral sessions, and [`FileStore`] writing one JSON document per key.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Fixed keys the engine stores under.
pub mod keys {
    /// The in-progress create-mode form draft.
    pub const DRAFT: &str = "company_draft";
    /// The locally cached company list.
    pub const COMPANIES: &str = "companies";
    /// The logged-in user flag.
    pub const USER: &str = "user";
}

/// Errors raised by storage backends and the serialization around them.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A stored or to-be-stored value could not be (de)serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The key contains characters the backend cannot represent.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Injectable persistence port.
///
/// Operations are synchronous: values are small JSON documents, and every
/// backend here completes in microseconds to low milliseconds. Implementors
/// must be shareable behind an `Arc` across threads.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

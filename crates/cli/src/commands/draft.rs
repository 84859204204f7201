//! Draft commands: `draft show`, `draft discard`.

use corpdir_client::{ConfigError, DraftStore, StorageError};
use thiserror::Error;

use super::open_store;

/// Errors that can occur during draft commands.
#[derive(Debug, Error)]
pub enum DraftCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The draft could not be removed or rendered.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The draft could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Print the saved draft as pretty JSON.
pub fn show() -> Result<(), DraftCommandError> {
    let (_, store) = open_store()?;
    match DraftStore::new(store).load() {
        Some(values) => {
            tracing::info!("{}", serde_json::to_string_pretty(&values)?);
        }
        None => tracing::info!("No saved draft."),
    }
    Ok(())
}

/// Remove the saved draft.
pub fn discard() -> Result<(), DraftCommandError> {
    let (_, store) = open_store()?;
    DraftStore::new(store).discard()?;
    tracing::info!("Draft discarded.");
    Ok(())
}

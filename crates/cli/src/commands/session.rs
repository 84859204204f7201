//! Session commands: `login`, `logout`, `whoami`.
//!
//! The session is a local convenience, not a credential. API authorization
//! comes from `CORPDIR_API_TOKEN`; the session only remembers who is sitting
//! at this machine.

use corpdir_client::{ConfigError, SessionStore, StorageError};
use thiserror::Error;

use super::open_store;

/// Errors that can occur during session commands.
#[derive(Debug, Error)]
pub enum SessionCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The session document could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Store a session for `name`.
pub fn login(name: &str) -> Result<(), SessionCommandError> {
    let (_, store) = open_store()?;
    let session = SessionStore::new(store).login(name)?;
    tracing::info!("Logged in as {}", session.full_name);
    Ok(())
}

/// Clear the stored session.
pub fn logout() -> Result<(), SessionCommandError> {
    let (_, store) = open_store()?;
    SessionStore::new(store).logout()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Print the stored session, if any.
pub fn whoami() -> Result<(), SessionCommandError> {
    let (_, store) = open_store()?;
    match SessionStore::new(store).current() {
        Some(session) => {
            tracing::info!("{}", session.full_name);
            tracing::info!("  logged in since {}", session.login_time);
        }
        None => tracing::info!("Not logged in"),
    }
    Ok(())
}

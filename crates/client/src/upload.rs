//! Logo upload flow against presigned storage URLs.
//!
//! Uploading is a three-step handshake: ask the backend for a signed upload
//! grant, `PUT` the bytes straight to object storage, then resolve a signed
//! display URL for the preview. [`LogoUploader`] tracks where in that
//! handshake the current attempt is and what the form should show meanwhile.

use std::sync::Arc;

use corpdir_core::StorageKey;
use thiserror::Error;
use tracing::{instrument, warn};

use crate::api::{ApiError, CompanyApi};

/// Where the current upload attempt is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// No attempt in flight and none has failed.
    Idle,
    /// Waiting for the backend to grant a signed upload URL.
    Requesting,
    /// Sending bytes to object storage.
    Uploading,
    /// Bytes are stored and the key is recorded.
    Complete,
    /// The last attempt failed; retrying is allowed.
    Failed,
}

/// A file picked for upload, already read into memory.
#[derive(Debug, Clone)]
pub struct LogoFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    /// Size of the file in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }
}

/// Errors surfaced by an upload attempt.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file was rejected locally, before any network traffic.
    #[error("File is {size} bytes, over the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    /// A backend call or the storage transfer failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Drives one logo slot of the profile form.
///
/// The recorded key only ever changes when an attempt completes: a failed
/// attempt leaves the previous key and preview in place so the form keeps
/// showing the last good logo. Oversized files are rejected before the
/// backend hears about them.
pub struct LogoUploader {
    api: Arc<dyn CompanyApi>,
    max_bytes: u64,
    phase: UploadPhase,
    logo_key: Option<StorageKey>,
    preview_url: Option<String>,
    last_error: Option<String>,
    drag_active: bool,
}

impl LogoUploader {
    #[must_use]
    pub fn new(api: Arc<dyn CompanyApi>, max_bytes: u64) -> Self {
        Self {
            api,
            max_bytes,
            phase: UploadPhase::Idle,
            logo_key: None,
            preview_url: None,
            last_error: None,
            drag_active: false,
        }
    }

    /// Uploads `file` and records its storage key on success.
    ///
    /// A failure at any step moves the phase to [`UploadPhase::Failed`] and
    /// keeps the previous key and preview; the caller may simply attach
    /// again. A file over the size limit is rejected without touching the
    /// phase at all.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::TooLarge`] for oversized files and
    /// [`UploadError::Api`] when the grant request or the storage transfer
    /// fails.
    #[instrument(skip(self, file), fields(file_name = %file.name, size = file.size()))]
    pub async fn attach(&mut self, file: LogoFile) -> Result<StorageKey, UploadError> {
        let size = file.size();
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        self.phase = UploadPhase::Requesting;
        self.last_error = None;

        let signed = match self.api.signed_upload_url(&file.name, &file.content_type).await {
            Ok(signed) => signed,
            Err(error) => return Err(self.fail(error)),
        };

        self.phase = UploadPhase::Uploading;
        if let Err(error) = self
            .api
            .put_object(&signed.url, &file.content_type, file.bytes)
            .await
        {
            return Err(self.fail(error));
        }

        self.logo_key = Some(signed.key.clone());
        self.phase = UploadPhase::Complete;

        // The bytes are safely stored at this point. A preview that cannot
        // be resolved is a cosmetic problem, not a failed upload.
        match self.api.signed_download_url(&signed.key).await {
            Ok(url) => self.preview_url = Some(url),
            Err(error) => {
                warn!(%error, key = %signed.key, "logo stored but preview URL could not be resolved");
            }
        }

        Ok(signed.key)
    }

    /// Adopts an already-stored logo, as when editing an existing record,
    /// and resolves its preview.
    pub async fn show_existing(&mut self, key: StorageKey) {
        self.logo_key = Some(key.clone());
        self.phase = UploadPhase::Complete;
        match self.api.signed_download_url(&key).await {
            Ok(url) => self.preview_url = Some(url),
            Err(error) => {
                warn!(%error, %key, "could not resolve preview for existing logo");
            }
        }
    }

    /// Resolves a display URL for an arbitrary stored object. Resolution is
    /// read-only; calling it repeatedly for the same key is cheap because
    /// the client caches grants.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Api`] when the backend refuses the grant.
    pub async fn resolve_preview_url(&self, key: &StorageKey) -> Result<String, UploadError> {
        Ok(self.api.signed_download_url(key).await?)
    }

    /// Marks the drop zone as hovered. Purely visual.
    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    /// Clears the drop zone hover.
    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    #[must_use]
    pub const fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// The key of the last successfully stored logo.
    #[must_use]
    pub const fn logo_key(&self) -> Option<&StorageKey> {
        self.logo_key.as_ref()
    }

    /// Display URL for the current logo, when one resolved.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Message from the last failed attempt.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    fn fail(&mut self, error: ApiError) -> UploadError {
        self.phase = UploadPhase::Failed;
        self.last_error = Some(error.to_string());
        UploadError::Api(error)
    }
}

//! GraphQL client for the company registry backend.
//!
//! # Architecture
//!
//! - Uses `graphql-client` request and response types for type-safe queries
//! - The backend is the source of truth; the local company list is a display
//!   cache, never a sync target
//! - Signed download URLs are cached in-memory via `moka` (4 minute TTL,
//!   inside the grant lifetime)
//!
//! # Operations
//!
//! - `getCompany`, `createCompany`, `updateCompany` for profile records
//! - `getSignedUploadUrl`, `getSignedDownloadUrl` for logo transfer grants
//! - A raw HTTP `PUT` moves logo bytes to object storage; the GraphQL layer
//!   only ever sees keys and URLs

mod operations;
mod registry;

pub use operations::{
    CreateCompany, GetCompany, GetSignedDownloadUrl, GetSignedUploadUrl, UpdateCompany,
    create_company, get_company, get_signed_download_url, get_signed_upload_url, update_company,
};
pub use registry::RegistryClient;

use async_trait::async_trait;
use corpdir_core::{CompanyId, CompanyInput, CompanyRecord, StorageKey};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the registry API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Object storage rejected a signed-URL transfer.
    #[error("Object storage transfer failed with HTTP status {status}")]
    Transfer { status: u16 },
}

/// A GraphQL error returned by the registry API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

/// A short-lived grant for moving one object in or out of storage.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SignedUrl {
    /// Presigned URL, valid for a few minutes.
    pub url: String,
    /// Storage key the grant refers to.
    pub key: StorageKey,
}

/// The registry operations the profile flows depend on.
///
/// [`RegistryClient`] is the production implementation; tests substitute an
/// in-memory fake so the flows can be driven without a backend.
#[async_trait]
pub trait CompanyApi: Send + Sync {
    /// Fetches one company record by id.
    async fn fetch_company(&self, id: &CompanyId) -> Result<CompanyRecord, ApiError>;

    /// Creates a company and returns the stored record, id included.
    async fn create_company(&self, input: &CompanyInput) -> Result<CompanyRecord, ApiError>;

    /// Replaces the profile of an existing company.
    async fn update_company(
        &self,
        id: &CompanyId,
        input: &CompanyInput,
    ) -> Result<CompanyRecord, ApiError>;

    /// Requests a grant for uploading one file to object storage.
    async fn signed_upload_url(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<SignedUrl, ApiError>;

    /// Requests a short-lived display URL for a stored object.
    async fn signed_download_url(&self, key: &StorageKey) -> Result<String, ApiError>;

    /// Sends raw bytes to a presigned URL.
    async fn put_object(
        &self,
        url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError>;
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            // Include message if present
            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            // Include path if present
            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            // Include location if present
            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

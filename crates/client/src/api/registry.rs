//! Registry API client implementation.
//!
//! Uses `graphql_client` request types with `reqwest` 0.13 for HTTP. Signed
//! download URLs are cached with `moka` for four minutes, comfortably inside
//! the grant lifetime, so repainting a logo preview does not re-ask the
//! backend.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use corpdir_core::{CompanyId, CompanyInput, CompanyRecord, StorageKey};
use graphql_client::{GraphQLQuery, Response};
use moka::future::Cache;
use reqwest::header::CONTENT_TYPE;
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::ClientConfig;

use super::operations::{
    CreateCompany, GetCompany, GetSignedDownloadUrl, GetSignedUploadUrl, UpdateCompany,
    create_company, get_company, get_signed_download_url, get_signed_upload_url, update_company,
};
use super::{ApiError, CompanyApi, SignedUrl};

// =============================================================================
// RegistryClient
// =============================================================================

/// Client for the company registry GraphQL API.
///
/// Provides type-safe access to company records and signed transfer URLs.
/// Download URLs are cached for 4 minutes.
#[derive(Clone)]
pub struct RegistryClient {
    inner: Arc<RegistryClientInner>,
}

struct RegistryClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
    download_urls: Cache<String, String>,
}

impl RegistryClient {
    /// Create a new registry API client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let download_urls = Cache::builder()
            .max_capacity(64)
            .time_to_live(Duration::from_secs(240)) // 4 minutes
            .build();

        Self {
            inner: Arc::new(RegistryClientInner {
                client: reqwest::Client::new(),
                endpoint: config.api_url.clone(),
                access_token: config
                    .api_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_string()),
                download_urls,
            }),
        }
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ApiError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let mut request = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body);
        if let Some(token) = &self.inner.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        // Check for non-success status codes
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "registry API returned non-success status"
            );
            return Err(ApiError::GraphQL(vec![super::GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        // Parse the response
        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "failed to parse registry GraphQL response"
                );
                return Err(ApiError::Parse(e));
            }
        };

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            // Log the raw errors for debugging
            tracing::debug!(
                errors = ?errors,
                "GraphQL errors in response"
            );

            return Err(ApiError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| super::GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| super::GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "registry GraphQL response has no data and no errors"
            );
            ApiError::GraphQL(vec![super::GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    // =========================================================================
    // Company Methods
    // =========================================================================

    /// Get a company record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the company is not found or the API request fails.
    #[instrument(skip(self), fields(company_id = %id))]
    pub async fn get_company(&self, id: &CompanyId) -> Result<CompanyRecord, ApiError> {
        let variables = get_company::Variables {
            id: id.as_str().to_string(),
        };

        let data = self.execute::<GetCompany>(variables).await?;

        data.get_company
            .ok_or_else(|| ApiError::NotFound(format!("Company not found: {id}")))
    }

    /// Create a company and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails or returns no company.
    #[instrument(skip(self, input))]
    pub async fn create_company(&self, input: &CompanyInput) -> Result<CompanyRecord, ApiError> {
        let variables = create_company::Variables {
            input: input.clone(),
        };

        let data = self.execute::<CreateCompany>(variables).await?;

        if let Some(payload) = data.create_company
            && let Some(company) = payload.company
        {
            return Ok(company);
        }

        Err(ApiError::GraphQL(vec![super::GraphQLError {
            message: "Failed to create company".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }

    /// Replace the profile of an existing company.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails or returns no company.
    #[instrument(skip(self, input), fields(company_id = %id))]
    pub async fn update_company(
        &self,
        id: &CompanyId,
        input: &CompanyInput,
    ) -> Result<CompanyRecord, ApiError> {
        let variables = update_company::Variables {
            company_id: id.as_str().to_string(),
            input: input.clone(),
        };

        let data = self.execute::<UpdateCompany>(variables).await?;

        if let Some(payload) = data.update_company
            && let Some(company) = payload.company
        {
            return Ok(company);
        }

        Err(ApiError::GraphQL(vec![super::GraphQLError {
            message: "Failed to update company".to_string(),
            locations: vec![],
            path: vec![],
        }]))
    }

    // =========================================================================
    // Transfer Methods
    // =========================================================================

    /// Request a grant for uploading one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or grants nothing.
    #[instrument(skip(self), fields(file_name = %file_name))]
    pub async fn signed_upload_url(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<SignedUrl, ApiError> {
        let variables = get_signed_upload_url::Variables {
            input: get_signed_upload_url::SignedFileUploadInput {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
            },
        };

        let data = self.execute::<GetSignedUploadUrl>(variables).await?;

        data.get_signed_upload_url.ok_or_else(|| {
            ApiError::GraphQL(vec![super::GraphQLError {
                message: "No signed upload URL in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    /// Request a short-lived display URL for a stored object.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or grants nothing.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn signed_download_url(&self, key: &StorageKey) -> Result<String, ApiError> {
        let cache_key = key.as_str().to_string();

        // Check cache
        if let Some(url) = self.inner.download_urls.get(&cache_key).await {
            debug!("cache hit for download URL");
            return Ok(url);
        }

        let variables = get_signed_download_url::Variables {
            s3_key: key.as_str().to_string(),
        };

        let data = self.execute::<GetSignedDownloadUrl>(variables).await?;

        let signed = data.get_signed_download_url.ok_or_else(|| {
            ApiError::GraphQL(vec![super::GraphQLError {
                message: "No signed download URL in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })?;

        // Cache the result
        self.inner
            .download_urls
            .insert(cache_key, signed.url.clone())
            .await;

        Ok(signed.url)
    }

    /// Send raw bytes to a presigned URL.
    ///
    /// The URL embeds its own credentials, so it is kept out of the span.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or storage answers with a
    /// non-success status.
    #[instrument(skip(self, url, bytes), fields(content_type = %content_type, size = bytes.len()))]
    pub async fn put_object(
        &self,
        url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "object storage rejected the upload");
            return Err(ApiError::Transfer {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl CompanyApi for RegistryClient {
    async fn fetch_company(&self, id: &CompanyId) -> Result<CompanyRecord, ApiError> {
        self.get_company(id).await
    }

    async fn create_company(&self, input: &CompanyInput) -> Result<CompanyRecord, ApiError> {
        Self::create_company(self, input).await
    }

    async fn update_company(
        &self,
        id: &CompanyId,
        input: &CompanyInput,
    ) -> Result<CompanyRecord, ApiError> {
        Self::update_company(self, id, input).await
    }

    async fn signed_upload_url(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<SignedUrl, ApiError> {
        Self::signed_upload_url(self, file_name, content_type).await
    }

    async fn signed_download_url(&self, key: &StorageKey) -> Result<String, ApiError> {
        Self::signed_download_url(self, key).await
    }

    async fn put_object(
        &self,
        url: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        Self::put_object(self, url, content_type, bytes).await
    }
}

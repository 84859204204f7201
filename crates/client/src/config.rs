//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CORPDIR_API_URL` - GraphQL endpoint of the company registry
//!
//! ## Optional
//! - `CORPDIR_API_TOKEN` - Bearer token sent with every registry request
//! - `CORPDIR_DATA_DIR` - Directory for locally persisted state (default: `.corpdir`)
//! - `CORPDIR_MAX_LOGO_MB` - Logo size limit in megabytes (default: 5)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
///
/// Implements `Debug` manually to redact the API token.
#[derive(Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint of the company registry
    pub api_url: String,
    /// Bearer token for the registry (optional; some deployments are open)
    pub api_token: Option<SecretString>,
    /// Directory holding locally persisted state (draft, list cache, session)
    pub data_dir: PathBuf,
    /// Maximum accepted logo size in bytes
    pub max_logo_bytes: u64,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("data_dir", &self.data_dir)
            .field("max_logo_bytes", &self.max_logo_bytes)
            .finish()
    }
}

impl ClientConfig {
    /// Default logo size limit in megabytes.
    pub const DEFAULT_MAX_LOGO_MB: u64 = 5;

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("CORPDIR_API_URL")?;
        let api_token = get_optional_env("CORPDIR_API_TOKEN").map(SecretString::from);
        let data_dir = PathBuf::from(get_env_or_default("CORPDIR_DATA_DIR", ".corpdir"));
        let max_logo_mb = parse_positive_u64(
            "CORPDIR_MAX_LOGO_MB",
            &get_env_or_default(
                "CORPDIR_MAX_LOGO_MB",
                &Self::DEFAULT_MAX_LOGO_MB.to_string(),
            ),
        )?;

        Ok(Self {
            api_url,
            api_token,
            data_dir,
            max_logo_bytes: max_logo_mb * 1024 * 1024,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a strictly positive integer setting.
fn parse_positive_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    let parsed = value
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if parsed == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_u64_valid() {
        assert_eq!(parse_positive_u64("TEST_VAR", "5").unwrap(), 5);
    }

    #[test]
    fn test_parse_positive_u64_rejects_zero() {
        let err = parse_positive_u64("TEST_VAR", "0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_parse_positive_u64_rejects_garbage() {
        assert!(parse_positive_u64("TEST_VAR", "five").is_err());
        assert!(parse_positive_u64("TEST_VAR", "-1").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig {
            api_url: "https://registry.example/graphql".to_string(),
            api_token: Some(SecretString::from("super_secret_token")),
            data_dir: PathBuf::from(".corpdir"),
            max_logo_bytes: 5 * 1024 * 1024,
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("registry.example"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }
}

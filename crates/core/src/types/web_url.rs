//! Web page URL type.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors that can occur when parsing a [`WebUrl`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WebUrlError {
    /// The input string is empty after trimming.
    #[error("URL cannot be empty")]
    Empty,
    /// The input is not a valid absolute URL.
    #[error("invalid URL: {0}")]
    Invalid(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme that was rejected.
        scheme: String,
    },
}

/// An absolute http(s) URL pointing at a web page (company website, social
/// profile).
///
/// The trimmed input is stored verbatim once it parses; the parsed form is
/// only used for validation, so the user's spelling survives round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct WebUrl(String);

impl WebUrl {
    /// Parse a `WebUrl` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, fails URL parsing, or uses a
    /// scheme other than http or https.
    pub fn parse(s: &str) -> Result<Self, WebUrlError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WebUrlError::Empty);
        }

        let parsed = Url::parse(trimmed)?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(trimmed.to_owned())),
            other => Err(WebUrlError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `WebUrl` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WebUrl {
    type Err = WebUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for WebUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

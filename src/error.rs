//! Error types for mailhandoff.

use thiserror::Error;

/// Errors that can occur when building a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The assembled link is not a valid URL.
    ///
    /// The builder never escapes header values, so this only happens when the
    /// caller passes characters that were not percent-encoded.
    #[error("Malformed URL for {provider}: {reason} ({url})")]
    MalformedUrl {
        provider: &'static str,
        /// The assembled candidate string.
        url: String,
        reason: String,
    },

    /// Configuration error (unknown provider, unreadable catalog, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl LinkError {
    /// Create a malformed-URL error for a provider.
    pub fn malformed(
        provider: &'static str,
        url: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedUrl {
            provider,
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from URL assembly rather than configuration.
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, Self::MalformedUrl { .. })
    }
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

//! Error types for table sources.

/// Result type for table source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure to obtain a table from the upstream provider.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Credential material is missing or malformed.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// The token endpoint rejected our assertion.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status.
    #[error("Upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The provider's response could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The source is not configured correctly.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SourceError {
    pub fn credentials(message: impl Into<String>) -> Self {
        Self::Credentials(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Whether the failure happened before any request reached the provider.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Credentials(_) | Self::Configuration(_))
    }
}

#[cfg(feature = "google-sheets")]
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Http(err.to_string())
        }
    }
}

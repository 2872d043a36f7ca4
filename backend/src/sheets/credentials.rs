//! Service account credential loading.
//!
//! Keys come either from a JSON key file on disk or from the same JSON passed
//! inline (typically through an environment variable on hosted deployments).

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use super::error::{SourceError, SourceResult};

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Where to read the service account key from.
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    File(PathBuf),
    Inline(String),
}

impl CredentialSource {
    /// Read and parse the key.
    pub fn load(&self) -> SourceResult<ServiceAccountKey> {
        match self {
            CredentialSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    SourceError::credentials(format!(
                        "Failed to read service account file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                ServiceAccountKey::from_json(&content)
            }
            CredentialSource::Inline(json) => ServiceAccountKey::from_json(json),
        }
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::File(path) => f.debug_tuple("File").field(path).finish(),
            CredentialSource::Inline(_) => f.write_str("Inline(<redacted>)"),
        }
    }
}

impl Default for CredentialSource {
    fn default() -> Self {
        CredentialSource::File(PathBuf::from("credentials.json"))
    }
}

/// The fields of a Google service account key that we need.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> SourceResult<Self> {
        let key: ServiceAccountKey = serde_json::from_str(json).map_err(|e| {
            SourceError::credentials(format!("Invalid service account JSON: {}", e))
        })?;
        if key.client_email.trim().is_empty() {
            return Err(SourceError::credentials("Service account client_email is empty"));
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err(SourceError::credentials(
                "Service account private_key is not a PEM private key",
            ));
        }
        Ok(key)
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

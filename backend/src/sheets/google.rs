//! Google Sheets v4 table source.
//!
//! Authenticates as a service account: a short-lived RS256 JWT assertion is
//! exchanged at the key's token endpoint for a bearer token, which is then
//! reused until shortly before it expires. The configured range is read with a
//! single `values.get` call.

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use parking_lot::Mutex;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::credentials::{CredentialSource, ServiceAccountKey};
use super::error::{SourceError, SourceResult};
use super::source::TableSource;
use crate::config::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SHEETS_API_BASE};
use crate::models::RawTable;

pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
// Refresh this long before the token actually expires.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Settings for [`GoogleSheetsSource`].
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    pub spreadsheet_id: String,
    /// A1 notation, e.g. `Sheet1!A:F`.
    pub range: String,
    pub credentials: CredentialSource,
    /// Base URL of the Sheets API, overridable for testing.
    pub api_base: String,
    /// Timeout applied to each upstream request.
    pub timeout: Duration,
}

impl GoogleSheetsConfig {
    pub fn new(
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
        credentials: CredentialSource,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            credentials,
            api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Reads a range of a spreadsheet through the Sheets REST API.
pub struct GoogleSheetsSource {
    config: GoogleSheetsConfig,
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    client: Client,
    token: Mutex<Option<AccessToken>>,
}

impl GoogleSheetsSource {
    /// Load credentials and prepare the HTTP client.
    ///
    /// Fails early on unreadable or malformed credentials so a misconfigured
    /// deployment does not start serving errors.
    pub fn new(config: GoogleSheetsConfig) -> SourceResult<Self> {
        if config.spreadsheet_id.trim().is_empty() {
            return Err(SourceError::configuration("Spreadsheet id is empty"));
        }
        if config.range.trim().is_empty() {
            return Err(SourceError::configuration("Spreadsheet range is empty"));
        }

        let key = config.credentials.load()?;
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
            SourceError::credentials(format!("Invalid service account private key: {}", e))
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Http(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            client_email = %key.client_email,
            spreadsheet_id = %config.spreadsheet_id,
            range = %config.range,
            "Google Sheets source initialized"
        );

        Ok(Self {
            config,
            key,
            encoding_key,
            client,
            token: Mutex::new(None),
        })
    }

    pub fn config(&self) -> &GoogleSheetsConfig {
        &self.config
    }

    fn values_url(&self) -> SourceResult<Url> {
        let mut url = Url::parse(&self.config.api_base).map_err(|e| {
            SourceError::configuration(format!(
                "Invalid Sheets API base URL '{}': {}",
                self.config.api_base, e
            ))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                SourceError::configuration(format!(
                    "Sheets API base URL '{}' cannot carry a path",
                    self.config.api_base
                ))
            })?
            .pop_if_empty()
            .extend([
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                self.config.range.as_str(),
            ]);
        Ok(url)
    }

    fn sign_assertion(&self) -> SourceResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.key.client_email,
            scope: SHEETS_READONLY_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| SourceError::Auth(format!("Failed to sign token assertion: {}", e)))
    }

    async fn access_token(&self) -> SourceResult<String> {
        let cached = self
            .token
            .lock()
            .as_ref()
            .filter(|t| t.expires_at > Instant::now())
            .map(|t| t.value.clone());
        if let Some(token) = cached {
            return Ok(token);
        }

        let assertion = self.sign_assertion()?;
        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| SourceError::Auth(format!("Failed to request access token: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<empty response>".to_string());

        if !status.is_success() {
            return Err(SourceError::Auth(format!(
                "Token request failed ({}): {}",
                status,
                body.trim()
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| SourceError::Auth(format!("Failed to parse token response: {}", e)))?;

        let lifetime = Duration::from_secs(token.expires_in.unwrap_or(3600))
            .saturating_sub(TOKEN_REFRESH_MARGIN);
        debug!(lifetime_secs = lifetime.as_secs(), "Obtained access token");

        *self.token.lock() = Some(AccessToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });
        Ok(token.access_token)
    }
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl TableSource for GoogleSheetsSource {
    async fn fetch_table(&self) -> SourceResult<RawTable> {
        let token = self.access_token().await?;
        let url = self.values_url()?;
        debug!(%url, "Fetching spreadsheet values");

        let response = self.client.get(url).bearer_auth(&token).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<empty response>".to_string());
            return Err(SourceError::upstream(status.as_u16(), body.trim()));
        }

        let payload: ValueRange = response.json().await?;
        let values = payload
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();
        Ok(RawTable::from_values(values))
    }

    fn describe(&self) -> String {
        format!(
            "google-sheets:{} ({})",
            self.config.spreadsheet_id, self.config.range
        )
    }
}

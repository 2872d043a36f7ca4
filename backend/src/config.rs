//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables (a `.env` file in the working directory is loaded
//! first if present).
//!
//! # Environment Variables
//!
//! - `TIMETABLE_CONFIG`: path of the TOML file (default: search `timetable.toml`)
//! - `TIMETABLE_SOURCE`: `google` | `static` (default: `google` when a spreadsheet id is set)
//! - `SPREADSHEET_ID`: spreadsheet to read (required for `google`)
//! - `RANGE_NAME`: A1 range (default: `Sheet1!A:F`)
//! - `SERVICE_ACCOUNT_JSON`: inline service account key
//! - `SERVICE_ACCOUNT_FILE`: service account key file (default: `credentials.json`)
//! - `STATIC_DATA_FILE`: JSON grid served by the `static` source
//! - `SHEETS_API_BASE`: Sheets API base URL
//! - `REQUEST_TIMEOUT_SECS`: upstream request timeout (default: 30)
//! - `CACHE_TTL_SECS`: response cache window, 0 disables (default: 300)
//! - `STATIC_DIR`: directory holding `index.html` (default: `.`)
//! - `HOST` / `PORT`: bind address (default: `0.0.0.0:8080`)

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::sheets::{CredentialSource, SourceType};

pub const DEFAULT_RANGE: &str = "Sheet1!A:F";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while assembling [`AppConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {0}")]
    Missing(String),
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_type: SourceType,
    pub spreadsheet_id: Option<String>,
    pub range: String,
    pub credentials: CredentialSource,
    pub static_data: Option<PathBuf>,
    pub sheets_api_base: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_type: SourceType::Static,
            spreadsheet_id: None,
            range: DEFAULT_RANGE.to_string(),
            credentials: CredentialSource::default(),
            static_data: None,
            sheets_api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            static_dir: PathBuf::from("."),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// On-disk configuration file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub range: Option<String>,
    pub credentials_file: Option<PathBuf>,
    pub credentials_json: Option<String>,
    pub static_data: Option<PathBuf>,
    pub api_base: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub cache_ttl_secs: Option<u64>,
}

impl ConfigFile {
    /// Load a configuration file from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Look for `timetable.toml` in the usual places.
    ///
    /// Searches:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("timetable.toml"),
            PathBuf::from("backend/timetable.toml"),
            PathBuf::from("../timetable.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                debug!(path = %path.display(), "Using config file");
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }
}

fn parse_setting<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key: key.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl AppConfig {
    /// Load `.env`, the config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::Invalid {
                    key: ".env".to_string(),
                    value: String::new(),
                    reason: e.to_string(),
                })
            }
        }
        Self::from_env()
    }

    /// Resolve from the config file (if any) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = match std::env::var("TIMETABLE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => ConfigFile::from_file(path.trim())?,
            _ => ConfigFile::from_default_location()?.unwrap_or_default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Layer `env` over `file` over the defaults.
    ///
    /// `lookup` reads an environment variable, so callers can resolve against
    /// something other than the process environment. Empty values count as unset.
    pub fn resolve<F>(file: ConfigFile, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();

        let spreadsheet_id = env("SPREADSHEET_ID").or(file.source.spreadsheet_id);

        let source_type = match env("TIMETABLE_SOURCE").or(file.source.source_type) {
            Some(raw) => raw.parse::<SourceType>().map_err(|reason| ConfigError::Invalid {
                key: "TIMETABLE_SOURCE".to_string(),
                value: raw.clone(),
                reason,
            })?,
            None if spreadsheet_id.is_some() => SourceType::Google,
            None => SourceType::Static,
        };

        let credentials = if let Some(json) = env("SERVICE_ACCOUNT_JSON") {
            CredentialSource::Inline(json)
        } else if let Some(path) = env("SERVICE_ACCOUNT_FILE") {
            CredentialSource::File(PathBuf::from(path))
        } else if let Some(json) = file.source.credentials_json {
            CredentialSource::Inline(json)
        } else if let Some(path) = file.source.credentials_file {
            CredentialSource::File(path)
        } else {
            defaults.credentials
        };

        let request_timeout_secs = match env("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_setting("REQUEST_TIMEOUT_SECS", &raw)?,
            None => file
                .source
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS".to_string(),
                value: "0".to_string(),
                reason: "timeout must be positive".to_string(),
            });
        }

        let cache_ttl_secs = match env("CACHE_TTL_SECS") {
            Some(raw) => parse_setting("CACHE_TTL_SECS", &raw)?,
            None => file.server.cache_ttl_secs.unwrap_or(DEFAULT_CACHE_TTL_SECS),
        };

        let port = match env("PORT") {
            Some(raw) => parse_setting("PORT", &raw)?,
            None => file.server.port.unwrap_or(DEFAULT_PORT),
        };

        let config = Self {
            source_type,
            spreadsheet_id,
            range: env("RANGE_NAME")
                .or(file.source.range)
                .unwrap_or(defaults.range),
            credentials,
            static_data: env("STATIC_DATA_FILE")
                .map(PathBuf::from)
                .or(file.source.static_data),
            sheets_api_base: env("SHEETS_API_BASE")
                .or(file.source.api_base)
                .unwrap_or(defaults.sheets_api_base),
            request_timeout: Duration::from_secs(request_timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            static_dir: env("STATIC_DIR")
                .map(PathBuf::from)
                .or(file.server.static_dir)
                .unwrap_or(defaults.static_dir),
            host: env("HOST").or(file.server.host).unwrap_or(defaults.host),
            port,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source_type == SourceType::Google && self.spreadsheet_id.is_none() {
            return Err(ConfigError::Missing("SPREADSHEET_ID".to_string()));
        }
        Ok(())
    }

    /// Socket address to bind the server to.
    ///
    /// `host` may be an IPv4 or IPv6 literal or a resolvable name such as `localhost`.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.trim();
        let invalid = |reason: String| ConfigError::Invalid {
            key: "HOST".to_string(),
            value: self.host.clone(),
            reason,
        };
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }
        (host, self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host did not resolve to any address".to_string()))
    }
}

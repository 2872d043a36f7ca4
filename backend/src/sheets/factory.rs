//! Source factory for dependency injection.
//!
//! Builds the [`TableSource`] selected by the runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use super::error::{SourceError, SourceResult};
use super::local::StaticTableSource;
use super::source::TableSource;
use crate::config::AppConfig;

/// Which kind of source to serve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// Google Sheets over the REST API
    Google,
    /// Fixed in-memory table, optionally loaded from a JSON file
    Static,
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" | "google-sheets" | "sheets" => Ok(Self::Google),
            "static" | "local" => Ok(Self::Static),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Static => "static",
        }
    }
}

pub struct SourceFactory;

impl SourceFactory {
    /// Create the source described by `config`.
    pub fn create(config: &AppConfig) -> SourceResult<Arc<dyn TableSource>> {
        let source: Arc<dyn TableSource> = match config.source_type {
            SourceType::Google => Self::create_google(config)?,
            SourceType::Static => Arc::new(Self::create_static(config)?),
        };
        info!(source = %source.describe(), "Table source ready");
        Ok(source)
    }

    /// Static source from `static_data`, or an empty table when none is set.
    pub fn create_static(config: &AppConfig) -> SourceResult<StaticTableSource> {
        match &config.static_data {
            Some(path) => StaticTableSource::from_json_file(path),
            None => Ok(StaticTableSource::empty()),
        }
    }

    #[cfg(feature = "google-sheets")]
    fn create_google(config: &AppConfig) -> SourceResult<Arc<dyn TableSource>> {
        use super::google::{GoogleSheetsConfig, GoogleSheetsSource};

        let spreadsheet_id = config.spreadsheet_id.clone().ok_or_else(|| {
            SourceError::configuration("Google Sheets source requires SPREADSHEET_ID")
        })?;
        let sheets_config =
            GoogleSheetsConfig::new(spreadsheet_id, config.range.clone(), config.credentials.clone())
                .with_api_base(config.sheets_api_base.clone())
                .with_timeout(config.request_timeout);
        Ok(Arc::new(GoogleSheetsSource::new(sheets_config)?))
    }

    #[cfg(not(feature = "google-sheets"))]
    fn create_google(_config: &AppConfig) -> SourceResult<Arc<dyn TableSource>> {
        Err(SourceError::configuration(
            "Google Sheets source feature not enabled",
        ))
    }
}

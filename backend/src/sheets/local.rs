//! In-memory table source.
//!
//! Serves a fixed table. Used for local development without spreadsheet
//! credentials and throughout the tests.

use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::{SourceError, SourceResult};
use super::source::TableSource;
use crate::models::RawTable;

/// A [`TableSource`] that always returns the same table.
#[derive(Debug, Clone, Default)]
pub struct StaticTableSource {
    table: RawTable,
    label: String,
}

/// Accepted JSON layouts for static data files: either a bare grid or a Sheets
/// API style `{"values": [...]}` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValuesFile {
    Grid(Vec<Vec<String>>),
    Wrapped {
        #[serde(default)]
        values: Vec<Vec<String>>,
    },
}

impl StaticTableSource {
    pub fn new(table: RawTable) -> Self {
        Self {
            table,
            label: "static".to_string(),
        }
    }

    /// A source with no header and no rows.
    pub fn empty() -> Self {
        Self::new(RawTable::default())
    }

    /// Build from a grid whose first row is the header.
    pub fn from_values(values: Vec<Vec<String>>) -> Self {
        Self::new(RawTable::from_values(values))
    }

    /// Load a JSON grid from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SourceError::configuration(format!(
                "Failed to read static data file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut source = Self::from_json_str(&content)?;
        source.label = format!("static:{}", path.display());
        Ok(source)
    }

    pub fn from_json_str(content: &str) -> SourceResult<Self> {
        let parsed: ValuesFile = serde_json::from_str(content)
            .map_err(|e| SourceError::Decode(format!("Invalid static data JSON: {}", e)))?;
        let values = match parsed {
            ValuesFile::Grid(values) => values,
            ValuesFile::Wrapped { values } => values,
        };
        Ok(Self::from_values(values))
    }

    pub fn table(&self) -> &RawTable {
        &self.table
    }
}

#[async_trait]
impl TableSource for StaticTableSource {
    async fn fetch_table(&self) -> SourceResult<RawTable> {
        Ok(self.table.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

//! Tabular input types.
//!
//! A [`RawTable`] is exactly what the spreadsheet hands back: a header row and a
//! list of data rows, each cell a string. Rows are ragged: trailing empty cells
//! are usually omitted by the upstream API, so a row may be shorter than the header.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Header plus data rows as retrieved from the tabular source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Build a table from a `values` grid where the first row is the header.
    ///
    /// An empty grid produces a table with no header and no rows.
    pub fn from_values(values: Vec<Vec<String>>) -> Self {
        let mut iter = values.into_iter();
        match iter.next() {
            Some(header) => Self {
                header,
                rows: iter.collect(),
            },
            None => Self::default(),
        }
    }

    /// Number of rows including the header row.
    pub fn total_rows(&self) -> usize {
        if self.header.is_empty() {
            self.rows.len()
        } else {
            self.rows.len() + 1
        }
    }

    /// A table with no header, or with a header but no data rows, carries nothing
    /// worth aggregating.
    pub fn is_degenerate(&self) -> bool {
        self.header.is_empty() || self.total_rows() < 2
    }
}

/// One data row keyed by (trimmed) column name.
///
/// Lookups of absent columns yield an empty string rather than an error, so
/// callers never have to distinguish "column missing" from "cell empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRow {
    fields: HashMap<String, String>,
}

impl NormalizedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Value for `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for NormalizedRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

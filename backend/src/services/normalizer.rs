//! Row normalization.
//!
//! Pairs each raw row with the header, padding short rows with empty cells and
//! ignoring cells past the header's width. Header names and cell values are
//! trimmed. Never fails.

use crate::models::NormalizedRow;

/// Normalize `rows` against `header`.
///
/// When the header repeats a column name, the rightmost column wins.
pub fn normalize(header: &[String], rows: &[Vec<String>]) -> Vec<NormalizedRow> {
    let header: Vec<&str> = header.iter().map(|h| h.trim()).collect();
    rows.iter().map(|row| normalize_row(&header, row)).collect()
}

fn normalize_row(header: &[&str], row: &[String]) -> NormalizedRow {
    header
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let value = row.get(i).map(|cell| cell.trim()).unwrap_or("");
            (*column, value)
        })
        .collect()
}

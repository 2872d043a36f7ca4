//! The complete transformation from a fetched table to a timetable.

use super::{aggregate, normalize};
use crate::models::{RawTable, Timetable};

/// Normalize and aggregate `table`.
///
/// A table without a header, or without any data row, yields an empty
/// timetable; the caller decides how to present "no data".
pub fn build_timetable(table: &RawTable) -> Timetable {
    if table.is_degenerate() {
        return Timetable::new();
    }
    let rows = normalize(&table.header, &table.rows);
    aggregate(&rows)
}

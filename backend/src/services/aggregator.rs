//! Timetable aggregation.
//!
//! Groups normalized rows by their resolved calendar date. The first row seen for
//! a date decides that day's `holiday` and `day_order`; every row (including the
//! first) may contribute one period. Rows with an unparseable date are dropped,
//! rows with an incomplete period contribute no period. Neither is an error.

use tracing::debug;

use super::dates::canonical_date_key;
use crate::models::{DayEntry, NormalizedRow, PeriodEntry, Timetable};

pub const COL_DATE: &str = "Date";
pub const COL_HOLIDAY: &str = "Holiday";
pub const COL_DAY_ORDER: &str = "Day Order";
pub const COL_PERIOD: &str = "Period";
pub const COL_TIMING: &str = "Timing";
pub const COL_SUBJECT: &str = "Subject";

/// Fold `rows` into a [`Timetable`].
pub fn aggregate(rows: &[NormalizedRow]) -> Timetable {
    let mut timetable = Timetable::new();
    let mut skipped = 0usize;

    for row in rows {
        let raw_date = row.get(COL_DATE);
        let Some(date_key) = canonical_date_key(raw_date) else {
            skipped += 1;
            continue;
        };

        let day = timetable.entry_or_insert_with(date_key, || {
            DayEntry::new(row.get(COL_HOLIDAY).trim(), row.get(COL_DAY_ORDER).trim())
        });

        if let Some(period) = PeriodEntry::complete(
            row.get(COL_PERIOD).trim(),
            row.get(COL_TIMING).trim(),
            row.get(COL_SUBJECT).trim(),
        ) {
            day.periods.push(period);
        }
    }

    if skipped > 0 {
        debug!(skipped, "Dropped rows without a recognizable date");
    }

    timetable
}

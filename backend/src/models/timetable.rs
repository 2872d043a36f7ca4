//! Output types served to clients.
//!
//! The JSON shape is:
//!
//! ```text
//! {
//!   "2025-03-10": {
//!     "holiday": "",
//!     "day_order": "3",
//!     "periods": [ { "period": "1", "timing": "9-10", "subject": "Maths" } ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scheduled class slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub period: String,
    pub timing: String,
    pub subject: String,
}

impl PeriodEntry {
    /// Build an entry only when every field is non-empty.
    pub fn complete(period: &str, timing: &str, subject: &str) -> Option<Self> {
        if period.is_empty() || timing.is_empty() || subject.is_empty() {
            return None;
        }
        Some(Self {
            period: period.to_string(),
            timing: timing.to_string(),
            subject: subject.to_string(),
        })
    }
}

/// Everything known about a single calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub holiday: String,
    pub day_order: String,
    pub periods: Vec<PeriodEntry>,
}

impl DayEntry {
    pub fn new(holiday: impl Into<String>, day_order: impl Into<String>) -> Self {
        Self {
            holiday: holiday.into(),
            day_order: day_order.into(),
            periods: Vec::new(),
        }
    }
}

/// Date-keyed schedule. Keys are canonical `YYYY-MM-DD` strings, which sort
/// chronologically, so serialization order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    days: BTreeMap<String, DayEntry>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date_key: &str) -> Option<&DayEntry> {
        self.days.get(date_key)
    }

    /// Entry for `date_key`, created by `init` if absent. An existing entry is
    /// returned untouched.
    pub fn entry_or_insert_with<F>(&mut self, date_key: String, init: F) -> &mut DayEntry
    where
        F: FnOnce() -> DayEntry,
    {
        self.days.entry(date_key).or_insert_with(init)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayEntry)> {
        self.days.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of periods across all days.
    pub fn period_count(&self) -> usize {
        self.days.values().map(|d| d.periods.len()).sum()
    }
}

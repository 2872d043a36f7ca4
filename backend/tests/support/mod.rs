//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use timetable_backend::models::RawTable;
use timetable_backend::sheets::{SourceError, SourceResult, TableSource};

pub const HEADER: [&str; 6] = ["Date", "Holiday", "Day Order", "Period", "Timing", "Subject"];

pub fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

/// A table with the standard timetable header.
pub fn sheet(rows: &[&[&str]]) -> RawTable {
    RawTable::new(strings(&HEADER), rows.iter().map(|r| strings(r)).collect())
}

/// A small but realistic sheet: two school days, one holiday.
pub fn sample_sheet() -> RawTable {
    sheet(&[
        &["2025-03-10", "", "1", "1", "09:00-09:50", "Mathematics"],
        &["2025-03-10", "", "1", "2", "09:50-10:40", "Physics"],
        &["11/03/2025", "", "2", "1", "09:00-09:50", "Chemistry"],
        &["2025-03-14", "Holi", ""],
    ])
}

/// Source that counts fetches and can be switched into a failing state.
pub struct CountingSource {
    table: Mutex<RawTable>,
    fetches: AtomicUsize,
    failing: Mutex<bool>,
}

impl CountingSource {
    pub fn new(table: RawTable) -> Arc<Self> {
        Arc::new(Self {
            table: Mutex::new(table),
            fetches: AtomicUsize::new(0),
            failing: Mutex::new(false),
        })
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn set_table(&self, table: RawTable) {
        *self.table.lock().unwrap() = table;
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }
}

#[async_trait]
impl TableSource for CountingSource {
    async fn fetch_table(&self) -> SourceResult<RawTable> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if *self.failing.lock().unwrap() {
            return Err(SourceError::upstream(503, "backend unavailable"));
        }
        Ok(self.table.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with the given environment variables set (`Some`) or removed (`None`).
///
/// Holds a global lock for the duration so tests touching the process
/// environment do not interleave, and restores the previous values afterwards,
/// even on panic.
pub fn with_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(vars);
    f()
}

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(vars: &[(&str, Option<&str>)]) -> Self {
        let mut seen = HashSet::new();
        let previous = vars
            .iter()
            .filter(|(k, _)| seen.insert(*k))
            .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in vars {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

//! Fetch, transform and cache the timetable.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::cache::TtlCache;
use super::pipeline::build_timetable;
use crate::models::Timetable;
use crate::sheets::{SourceResult, TableSource};

/// Result of a successful timetable request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableOutcome {
    /// At least one day could be built from the source.
    Available(Arc<Timetable>),
    /// The source returned nothing usable.
    NoData,
}

/// Serves timetables from a [`TableSource`], caching successful results.
pub struct TimetableService {
    source: Arc<dyn TableSource>,
    cache: TtlCache<Arc<Timetable>>,
}

impl TimetableService {
    pub fn new(source: Arc<dyn TableSource>, cache_ttl: Duration) -> Self {
        Self {
            source,
            cache: TtlCache::new(cache_ttl),
        }
    }

    /// Human-readable description of the configured source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// Return the cached timetable or build a fresh one.
    ///
    /// Fetch failures are returned as-is and leave the cache untouched. Empty
    /// timetables are never cached, so a sheet that gains rows shows up on the
    /// next request.
    pub async fn get_timetable(&self) -> SourceResult<TimetableOutcome> {
        if let Some(cached) = self.cache.get() {
            debug!(days = cached.len(), "Serving timetable from cache");
            return Ok(TimetableOutcome::Available(cached));
        }

        let started = Instant::now();
        let table = self.source.fetch_table().await?;

        let timetable = build_timetable(&table);
        info!(
            rows = table.rows.len(),
            days = timetable.len(),
            periods = timetable.period_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built timetable"
        );

        if timetable.is_empty() {
            return Ok(TimetableOutcome::NoData);
        }

        let timetable = Arc::new(timetable);
        self.cache.insert(Arc::clone(&timetable));
        Ok(TimetableOutcome::Available(timetable))
    }
}

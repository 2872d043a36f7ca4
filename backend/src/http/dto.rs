//! Data Transfer Objects for the HTTP API.
//!
//! The timetable itself is served as [`Timetable`] directly; it already
//! serializes to the wire shape.

use serde::{Deserialize, Serialize};

pub use crate::models::{DayEntry, PeriodEntry, Timetable};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Description of the configured table source
    pub source: String,
    /// Response cache window in seconds (0 when disabled)
    pub cache_ttl_secs: u64,
}

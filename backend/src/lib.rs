//! # Timetable Backend
//!
//! Serves a class timetable kept in a spreadsheet as a date-keyed JSON document.
//!
//! The spreadsheet is loosely structured: a header row, ragged data rows, dates
//! typed in whichever format the author preferred. This crate turns that into a
//! clean schedule:
//!
//! ```text
//! RawTable ──normalize──▶ NormalizedRow* ──aggregate──▶ Timetable ──▶ JSON
//! ```
//!
//! ## Architecture
//!
//! - [`models`]: table and timetable types
//! - [`services`]: the pure pipeline plus the caching service around it
//! - [`sheets`]: table sources (Google Sheets, static data)
//! - [`config`]: layered runtime configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The pipeline itself ([`services::build_timetable`]) performs no I/O and holds
//! no state; everything with side effects is injected around it.

pub mod config;
pub mod models;
pub mod services;
pub mod sheets;

#[cfg(feature = "http-server")]
pub mod http;

pub use models::{DayEntry, NormalizedRow, PeriodEntry, RawTable, Timetable};
pub use services::build_timetable;

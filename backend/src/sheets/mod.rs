//! Tabular data sources.
//!
//! The timetable pipeline never fetches anything itself; it is handed a
//! [`RawTable`](crate::models::RawTable) by a [`TableSource`]. This module holds
//! the trait and its implementations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  TimetableService (services/)                            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │ fetch_table()
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  TableSource trait (source.rs)                            │
//! └───────────────────┬──────────────────────────────────────┘
//!         ┌───────────┴───────────────┐
//! ┌───────▼──────────────┐ ┌──────────▼───────────────────────┐
//! │ GoogleSheetsSource   │ │ StaticTableSource                │
//! │ (Sheets v4 + service │ │ (in-memory / JSON file, for dev  │
//! │  account auth)       │ │  and tests)                      │
//! └──────────────────────┘ └──────────────────────────────────┘
//! ```
//!
//! - `source`: trait definition
//! - `google`: Google Sheets implementation (feature `google-sheets`)
//! - `local`: static in-memory implementation
//! - `credentials`: service account key loading
//! - `factory`: builds the configured source

pub mod credentials;
pub mod error;
pub mod factory;
#[cfg(feature = "google-sheets")]
pub mod google;
pub mod local;
pub mod source;

pub use credentials::{CredentialSource, ServiceAccountKey};
pub use error::{SourceError, SourceResult};
pub use factory::{SourceFactory, SourceType};
#[cfg(feature = "google-sheets")]
pub use google::{GoogleSheetsConfig, GoogleSheetsSource};
pub use local::StaticTableSource;
pub use source::TableSource;

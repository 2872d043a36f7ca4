//! Service layer for the timetable pipeline and its orchestration.
//!
//! The pure transformation lives in [`normalizer`], [`dates`] and [`aggregator`],
//! composed by [`pipeline::build_timetable`]. [`timetable_service`] sits between
//! the table source and the HTTP layer and owns the response cache.

pub mod aggregator;
pub mod cache;
pub mod dates;
pub mod normalizer;
pub mod pipeline;
pub mod timetable_service;

pub use aggregator::aggregate;
pub use cache::TtlCache;
pub use dates::{canonical_date_key, parse_date, DATE_FORMATS};
pub use normalizer::normalize;
pub use pipeline::build_timetable;
pub use timetable_service::{TimetableOutcome, TimetableService};

//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::services::TimetableService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Timetable service wrapping the configured source and cache
    pub timetable: Arc<TimetableService>,
    /// Directory that holds the bundled `index.html`
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(timetable: Arc<TimetableService>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            timetable,
            static_dir: static_dir.into(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::sheets::SourceError;

pub const NO_DATA_MESSAGE: &str = "No data available";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch timetable data";

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
    /// Optional diagnostic detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The source had nothing to aggregate
    NoData,
    /// The upstream fetch failed
    Source(SourceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NoData => (StatusCode::NOT_FOUND, ApiError::new(NO_DATA_MESSAGE)),
            AppError::Source(e) => {
                error!(error = %e, "Error fetching timetable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new(FETCH_FAILED_MESSAGE).with_details(e.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::Source(err)
    }
}

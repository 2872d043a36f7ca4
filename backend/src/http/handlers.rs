//! HTTP handlers for the REST API.

use axum::{extract::State, Json};
use std::sync::Arc;

use super::dto::{HealthResponse, Timetable};
use super::error::AppError;
use super::state::AppState;
use crate::services::TimetableOutcome;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.timetable.source_description(),
        cache_ttl_secs: state.timetable.cache_ttl().as_secs(),
    })
}

/// GET /api/timetable
///
/// Date-keyed timetable. 404 when the sheet holds no usable rows, 500 when the
/// upstream fetch fails.
pub async fn get_timetable(State(state): State<AppState>) -> HandlerResult<Arc<Timetable>> {
    match state.timetable.get_timetable().await? {
        TimetableOutcome::Available(timetable) => Ok(Json(timetable)),
        TimetableOutcome::NoData => Err(AppError::NoData),
    }
}

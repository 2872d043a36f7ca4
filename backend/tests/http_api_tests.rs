//! HTTP-level tests driving the router directly.

mod support;

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use support::{sample_sheet, CountingSource};
use timetable_backend::http::{create_router, AppState};
use timetable_backend::models::RawTable;
use timetable_backend::services::TimetableService;
use timetable_backend::sheets::{StaticTableSource, TableSource};

fn app_with(source: Arc<dyn TableSource>, static_dir: &std::path::Path) -> Router {
    let service = Arc::new(TimetableService::new(source, Duration::from_secs(300)));
    create_router(AppState::new(service, static_dir))
}

fn app(source: Arc<dyn TableSource>) -> Router {
    app_with(source, std::path::Path::new("."))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_timetable_ok() {
    let (status, body) = get(app(CountingSource::new(sample_sheet())), "/api/timetable").await;
    assert_eq!(status, StatusCode::OK);

    let monday = &body["2025-03-10"];
    assert_eq!(monday["day_order"], "1");
    assert_eq!(monday["holiday"], "");
    assert_eq!(monday["periods"].as_array().unwrap().len(), 2);
    assert_eq!(monday["periods"][0]["subject"], "Mathematics");
    assert_eq!(body["2025-03-14"]["holiday"], "Holi");
}

#[tokio::test]
async fn test_timetable_no_data_is_404() {
    let (status, body) = get(app(Arc::new(StaticTableSource::empty())), "/api/timetable").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "No data available"}));
}

#[tokio::test]
async fn test_timetable_header_only_is_404() {
    let source = StaticTableSource::new(RawTable::new(vec!["Date".into()], vec![]));
    let (status, _) = get(app(Arc::new(source)), "/api/timetable").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_timetable_fetch_failure_is_500() {
    let source = CountingSource::new(sample_sheet());
    source.set_failing(true);
    let (status, body) = get(app(source), "/api/timetable").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch timetable data");
    assert!(body["details"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_timetable_cached_across_requests() {
    let source = CountingSource::new(sample_sheet());
    let router = app(source.clone());

    let (first, _) = get(router.clone(), "/api/timetable").await;
    let (second, _) = get(router, "/api/timetable").await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(source.fetches(), 1);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(CountingSource::new(sample_sheet())), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["source"], "counting");
    assert_eq!(body["cache_ttl_secs"], 300);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app(CountingSource::new(sample_sheet()))
        .oneshot(
            Request::builder()
                .uri("/api/timetable")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_post_not_allowed() {
    let response = app(CountingSource::new(sample_sheet()))
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/timetable")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_index_served_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Timetable</h1>").unwrap();

    let response = app_with(CountingSource::new(sample_sheet()), dir.path())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>Timetable</h1>");
}

#[tokio::test]
async fn test_missing_index_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let response = app_with(CountingSource::new(sample_sheet()), dir.path())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! Timetable HTTP Server Binary
//!
//! Main entry point for the timetable REST API. Loads configuration, builds the
//! table source, sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Serve from Google Sheets
//! SPREADSHEET_ID=... SERVICE_ACCOUNT_FILE=credentials.json \
//!   cargo run --bin timetable-server
//!
//! # Serve a local JSON grid
//! TIMETABLE_SOURCE=static STATIC_DATA_FILE=timetable.json \
//!   cargo run --bin timetable-server
//! ```
//!
//! See [`timetable_backend::config`] for every setting.
//! `RUST_LOG` sets the log level (default: info).

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use timetable_backend::config::AppConfig;
use timetable_backend::http::{create_router, AppState};
use timetable_backend::services::TimetableService;
use timetable_backend::sheets::SourceFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting timetable HTTP server");

    let config = AppConfig::load()?;
    info!(
        source = config.source_type.as_str(),
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "Configuration loaded"
    );

    // Credentials are loaded here so a bad key fails at startup
    let source = SourceFactory::create(&config)?;
    let service = Arc::new(TimetableService::new(source, config.cache_ttl));

    let state = AppState::new(service, config.static_dir.clone());
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Timetable: http://{}/api/timetable", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

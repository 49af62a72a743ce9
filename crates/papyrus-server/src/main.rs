use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod handlers;
mod routes;
mod staging;
mod state;

use state::AppState;

/// Uploaded documents can be large; axum's 2 MB default is far too small.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("papyrus=info".parse().unwrap()),
        )
        .init();

    let config = papyrus_core::AppConfig::from_env();
    let host = config.server_host.clone();
    let port = config.server_port;

    let engine = Arc::new(papyrus_extractors::OcrEngine::from_config(&config));
    let extractors = papyrus_extractors::ExtractorSet::new(engine);
    let service = Arc::new(papyrus_dispatch::ExtractionService::new(extractors));

    let state = AppState { config, service };

    let app = routes::create_router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{host}:{port}");
    tracing::info!("papyrus server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

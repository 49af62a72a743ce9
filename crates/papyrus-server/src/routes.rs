use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        // Extraction
        .route("/", get(handlers::root::welcome))
        .route("/supported-file-types", get(handlers::root::supported_file_types))
        .route("/extract", post(handlers::extract::extract_single))
        .route("/extract-batch", post(handlers::extract::extract_batch))
        // Flashcard decks
        .route("/generate-pptx/", post(handlers::deck::generate_pptx))
        .route("/styles/", get(handlers::deck::list_styles))
}

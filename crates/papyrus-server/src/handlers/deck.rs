use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info};

use papyrus_core::api_types::StylesResponse;
use papyrus_deck::{DeckRequest, DeckStyle};

use super::detail;

const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// POST /generate-pptx/ — render a flashcard deck and stream it back.
pub async fn generate_pptx(Json(request): Json<DeckRequest>) -> impl IntoResponse {
    let style = DeckStyle::from_name(request.style.as_deref().unwrap_or("classic"));
    info!(cards = request.flashcards.len(), ?style, "generating deck");

    match papyrus_deck::build_deck(&request.flashcards, style) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, PPTX_CONTENT_TYPE),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"flashcards.pptx\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!("deck generation failed: {e}");
            detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate presentation: {e}"),
            )
        }
    }
}

/// GET /styles/ — the deck style names the generator accepts.
pub async fn list_styles() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StylesResponse {
            styles: DeckStyle::names(),
        }),
    )
}

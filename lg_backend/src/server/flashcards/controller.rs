use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lg_core::server::payload::flashcards_request::FlashcardsRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub async fn generate_flashcards(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<FlashcardsRequest>, JsonRejection>,
) -> ResultAPI {
    let payload = payload?.0;
    payload.validate()?;

    debug!(
        "Received request to generate flashcards [category={}, level={:?}]",
        payload.category, payload.level
    );

    match state.service_flashcards.generate(&payload).await {
        Some(data) => Ok(Json(json!(data))),
        None => Ok(Json(json!({ "error": "Error while generating flashcards" }))),
    }
}

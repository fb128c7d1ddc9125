use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lg_core::server::payload::dialogue_request::DialogueRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub async fn generate_dialogue(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<DialogueRequest>, JsonRejection>,
) -> ResultAPI {
    let payload = payload?.0;
    payload.validate()?;

    debug!("Received request for dialogue on topic: {}", payload.topic);

    match state.service_dialogue.generate(&payload).await {
        Some(data) => Ok(Json(json!(data))),
        None => Ok(Json(json!({ "error": "Error while generating dialogue" }))),
    }
}

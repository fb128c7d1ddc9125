use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lg_core::server::payload::grammar_exercises_request::GrammarExercisesRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub async fn generate_grammar_exercises(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GrammarExercisesRequest>, JsonRejection>,
) -> ResultAPI {
    let payload = payload?.0;
    payload.validate()?;

    debug!(
        "Received request for grammar exercises [tense={:?}]",
        payload.tense
    );

    match state.service_grammar_exercises.generate(&payload).await {
        Some(data) => Ok(Json(json!(data))),
        None => Ok(Json(
            json!({ "error": "Error while generating grammar exercises" }),
        )),
    }
}

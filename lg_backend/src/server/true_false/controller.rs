use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lg_core::server::payload::true_false_request::TrueFalseRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub async fn generate_true_false_theses(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TrueFalseRequest>, JsonRejection>,
) -> ResultAPI {
    let payload = payload?.0;
    payload.validate()?;

    debug!("Received text of length {}", payload.text.len());

    match state.service_true_false.generate(&payload).await {
        Some(data) => Ok(Json(json!(data))),
        None => Ok(Json(
            json!({ "error": "Error generating true/false theses" }),
        )),
    }
}

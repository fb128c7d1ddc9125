use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lg_core::server::payload::text_analysis_request::TextAnalysisRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TextAnalysisRequest>, JsonRejection>,
) -> ResultAPI {
    let payload = payload?.0;

    debug!("Received text of length: {}", payload.text.len());

    match state.service_text_analysis.analyze(&payload).await {
        Some(data) => Ok(Json(json!(data))),
        None => Ok(Json(
            json!({ "error": "Error analyzing text or invalid JSON returned by GPT." }),
        )),
    }
}

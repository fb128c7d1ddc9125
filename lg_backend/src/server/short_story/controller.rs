use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use lg_core::server::payload::short_story_request::ShortStoryRequest;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub async fn generate_short_story(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ShortStoryRequest>, JsonRejection>,
) -> ResultAPI {
    let payload = payload?.0;
    payload.validate()?;

    debug!(
        "Request for a short story => topic: {}, maxLength: {}",
        payload.topic,
        payload.max_length.unwrap_or(500)
    );

    match state.service_short_story.generate(&payload).await {
        Some(data) => Ok(Json(json!(data))),
        None => Ok(Json(
            json!({ "error": "Error while generating short story" }),
        )),
    }
}

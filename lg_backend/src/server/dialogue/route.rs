use crate::server::app_state::AppState;
use crate::server::dialogue::controller::generate_dialogue;
use axum::routing::post;
use lg_core::server::routes::BackendApiMaterials;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(BackendApiMaterials::Dialogue.path(), post(generate_dialogue))
}

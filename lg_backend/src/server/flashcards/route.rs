use crate::server::app_state::AppState;
use crate::server::flashcards::controller::generate_flashcards;
use axum::routing::post;
use lg_core::server::routes::BackendApiMaterials;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiMaterials::Flashcards.path(),
        post(generate_flashcards),
    )
}

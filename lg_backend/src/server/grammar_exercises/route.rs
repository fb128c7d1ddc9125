use crate::server::app_state::AppState;
use crate::server::grammar_exercises::controller::generate_grammar_exercises;
use axum::routing::post;
use lg_core::server::routes::BackendApiMaterials;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiMaterials::GrammarExercises.path(),
        post(generate_grammar_exercises),
    )
}

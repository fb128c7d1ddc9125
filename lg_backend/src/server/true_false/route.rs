use crate::server::app_state::AppState;
use crate::server::true_false::controller::generate_true_false_theses;
use axum::routing::post;
use lg_core::server::routes::BackendApiMaterials;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiMaterials::TrueFalseTheses.path(),
        post(generate_true_false_theses),
    )
}

use crate::server::app_state::AppState;
use crate::server::short_story::controller::generate_short_story;
use axum::routing::post;
use lg_core::server::routes::BackendApiMaterials;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiMaterials::ShortStory.path(),
        post(generate_short_story),
    )
}

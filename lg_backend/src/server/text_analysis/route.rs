use crate::server::app_state::AppState;
use crate::server::text_analysis::controller::analyze_text;
use axum::routing::post;
use lg_core::server::routes::BackendApiMaterials;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiMaterials::TextGrammaticalAnalysis.path(),
        post(analyze_text),
    )
}

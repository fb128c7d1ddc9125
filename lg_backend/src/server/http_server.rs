use crate::clients::openai::CompletionClient;
use crate::error::Result;
use crate::server::app_state::AppState;
use crate::server::{
    dialogue, flashcards, grammar_exercises, short_story, text_analysis, true_false,
};
use axum::http::StatusCode;
use lg_core::server::default_config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use lg_core::server::routes::print_all_backend_api_paths;
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Builds the full router: one POST route per material kind, permissive
/// CORS, and request tracing.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(flashcards::route::routes())
        .merge(dialogue::route::routes())
        .merge(short_story::route::routes())
        .merge(text_analysis::route::routes())
        .merge(grammar_exercises::route::routes())
        .merge(true_false::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .merge(routes_api)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server using Axum with a shared completion client.
///
/// Binds to `SERVER_HOST`/`SERVER_PORT` (defaults from `lg_core`) and
/// serves the material-generation routes until shutdown.
#[tokio::main]
pub async fn http_server(client: Arc<CompletionClient>) -> Result<()> {
    let host = env::var("SERVER_HOST").unwrap_or(String::from(DEFAULT_SERVER_HOST));
    let port = env::var("SERVER_PORT").unwrap_or(String::from(DEFAULT_SERVER_PORT));

    let app_state = Arc::new(AppState::new(client));
    let router = build_router(app_state);

    print_all_backend_api_paths();

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on http://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(err.into());
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

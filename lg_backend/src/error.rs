use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use thiserror::Error;

pub type ResultAPI = std::result::Result<Json<Value>, crate::error::Error>;
pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] lg_core::error::ErrorCore),

    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No choices returned from the completion API")]
    NoCompletionChoices,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::Core(_) => axum::http::StatusCode::BAD_REQUEST,
            Error::InvalidRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            Error::Http(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::NoCompletionChoices => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Error::Io(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Error occurred: {:?}", self);
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

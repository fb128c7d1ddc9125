use thiserror::Error;

pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("{0}")]
    InvalidPayload(String),

    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),
}

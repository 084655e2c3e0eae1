//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shoplist::io::list_store::StoreError;
use thiserror::Error;
use tracing::error;

/// Failures that abort a request with `500 Internal Server Error`.
///
/// Invalid submissions never reach this type; they are absorbed as no-ops.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        let message = match &self {
            ServerError::Store(err) if err.is_corrupt() => "shopping list file is corrupt",
            ServerError::Store(_) => "shopping list storage failed",
            ServerError::Render(_) => "failed to render page",
        };
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

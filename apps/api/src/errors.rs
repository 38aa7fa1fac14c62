use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Backend (generation) trouble is deliberately absent: it is absorbed inside
/// the assembly step and never reaches the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-caused: missing required field or empty document list.
    /// Rejected before any per-document work.
    #[error("{0}")]
    Validation(String),

    /// One document in the batch could not be produced; the whole batch is
    /// discarded and the failing type is named.
    #[error("Error generating {doc_type} document: {detail}")]
    DocumentGeneration { doc_type: String, detail: String },

    #[error("Server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DocumentGeneration { .. } => {
                tracing::error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

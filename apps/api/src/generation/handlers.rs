//! Axum route handlers for the document generation API.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::generation::generator::generate_documents;
use crate::models::document::GeneratedDocument;
use crate::models::employee::EmployeeRequest;
use crate::state::AppState;

/// Operator-facing form page, embedded at build time.
const INTERFACE_PAGE: &str = include_str!("../../static/hr_interface.html");

#[derive(Debug, Serialize)]
pub struct GenerateDocumentsResponse {
    pub success: bool,
    pub documents: Vec<GeneratedDocument>,
}

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INTERFACE_PAGE)
}

/// POST /generate-documents
///
/// Validates the employee record, then assembles every requested document
/// type sequentially. All-or-nothing: a single failure discards the batch.
pub async fn handle_generate_documents(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<GenerateDocumentsResponse>, AppError> {
    let documents = generate_documents(
        &state.settings,
        &state.templates,
        state.generator.as_ref(),
        &request,
    )
    .await?;

    Ok(Json(GenerateDocumentsResponse {
        success: true,
        documents,
    }))
}

/// GET /download/:filename
///
/// Stateless deployment: nothing is written to disk, so the generation
/// response already carries everything the client needs.
pub async fn handle_download(Path(filename): Path<String>) -> Json<Value> {
    Json(json!({
        "message": "Documents are returned inline; use the content field from the generate-documents response",
        "filename": filename,
    }))
}

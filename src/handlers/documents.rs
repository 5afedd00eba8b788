// src/handlers/documents.rs

use crate::{
    errors::{AppError, AppResult},
    models::{DocumentAnalysis, DocumentRecord, UploadDocumentRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

/// List all documents in the vault, newest first
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    responses((status = 200, description = "Stored documents", body = Vec<DocumentRecord>)),
    tag = "Documents"
)]
pub async fn list_documents(State(state): State<AppState>) -> Json<Vec<DocumentRecord>> {
    Json(state.documents.read().await.clone())
}

/// Get a single document
#[utoipa::path(
    get,
    path = "/api/v1/documents/{document_id}",
    params(("document_id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document detail", body = DocumentRecord),
        (status = 404, description = "Document not found"),
    ),
    tag = "Documents"
)]
pub async fn get_document(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
) -> AppResult<Json<DocumentRecord>> {
    let documents = state.documents.read().await;
    documents
        .iter()
        .find(|d| d.id == document_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document {} not found", document_id)))
}

/// Store a document after running AI analysis over its text. Analysis
/// is best-effort: if the AI service fails, the document is still
/// stored with placeholder fields.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = UploadDocumentRequest,
    responses(
        (status = 201, description = "Document stored", body = DocumentRecord),
        (status = 400, description = "Empty document text"),
    ),
    tag = "Documents"
)]
pub async fn upload_document(
    State(state): State<AppState>,
    Json(body): Json<UploadDocumentRequest>,
) -> AppResult<(StatusCode, Json<DocumentRecord>)> {
    if body.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Document text cannot be empty".to_string(),
        ));
    }

    let analysis = match state.gemini.analyze_document(&body.content).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("Document analysis failed, storing with placeholders: {}", e);
            DocumentAnalysis::default()
        }
    };

    let now = Utc::now();
    let record = DocumentRecord {
        id: Uuid::new_v4(),
        name: body
            .name
            .unwrap_or_else(|| format!("Scan-{}.txt", now.format("%d-%m-%Y"))),
        doc_type: analysis.doc_type.unwrap_or_else(|| "Unknown".to_string()),
        upload_date: now,
        summary: analysis
            .summary
            .unwrap_or_else(|| "No summary available".to_string()),
        // Anything with a money figure goes in the Financial bucket
        category: if analysis.amount.is_some() {
            "Financial".to_string()
        } else {
            "General".to_string()
        },
        content: Some(body.content),
    };

    state.documents.write().await.insert(0, record.clone());
    Ok((StatusCode::CREATED, Json(record)))
}

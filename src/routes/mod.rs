// src/routes/mod.rs

use crate::{
    handlers::{
        assistant::ask_assistant,
        deadlines::list_deadlines,
        documents::{get_document, list_documents, upload_document},
        paye::{calculate_paye, calculate_paye_batch},
        profile::{get_dashboard, get_profile, get_tax_status, save_profile},
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // ─── Profile ──────────────────────────────────────────
        .route("/profile", put(save_profile).get(get_profile))
        .route("/profile/tax-status", get(get_tax_status))
        .route("/dashboard", get(get_dashboard))
        // ─── Compliance ───────────────────────────────────────
        .route("/deadlines", get(list_deadlines))
        .route("/paye/calculate", post(calculate_paye))
        .route("/paye/calculate-batch", post(calculate_paye_batch))
        // ─── Documents ────────────────────────────────────────
        .route("/documents", post(upload_document).get(list_documents))
        .route("/documents/{document_id}", get(get_document))
        // ─── Assistant ────────────────────────────────────────
        .route("/assistant/ask", post(ask_assistant))
}

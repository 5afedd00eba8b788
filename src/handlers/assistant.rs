// src/handlers/assistant.rs

use crate::{
    errors::{AppError, AppResult},
    models::{AskAssistantRequest, AskAssistantResponse},
    services::gemini::ASSISTANT_FALLBACK,
    state::AppState,
};
use axum::{Json, extract::State};
use tracing::warn;

/// Free-text tax Q&A. Best-effort: a failed AI call yields a canned
/// fallback answer rather than an error response.
#[utoipa::path(
    post,
    path = "/api/v1/assistant/ask",
    request_body = AskAssistantRequest,
    responses(
        (status = 200, description = "Assistant answer", body = AskAssistantResponse),
        (status = 400, description = "Empty question"),
    ),
    tag = "Assistant"
)]
pub async fn ask_assistant(
    State(state): State<AppState>,
    Json(body): Json<AskAssistantRequest>,
) -> AppResult<Json<AskAssistantResponse>> {
    if body.question.trim().is_empty() {
        return Err(AppError::Validation("Question cannot be empty".to_string()));
    }

    let response = match state
        .gemini
        .ask_tax_assistant(&body.question, body.context.as_deref())
        .await
    {
        Ok(answer) => AskAssistantResponse {
            answer,
            from_model: true,
        },
        Err(e) => {
            warn!("Assistant call failed, returning fallback: {}", e);
            AskAssistantResponse {
                answer: ASSISTANT_FALLBACK.to_string(),
                from_model: false,
            }
        }
    };

    Ok(Json(response))
}

// src/handlers/deadlines.rs

use crate::{
    errors::{AppError, AppResult},
    models::TaxDeadline,
    services::deadlines::DeadlineScheduler,
    state::AppState,
};
use axum::{Json, extract::State};
use chrono::Utc;

/// Upcoming statutory filing deadlines for the onboarded business,
/// generated fresh from the profile on every call
#[utoipa::path(
    get,
    path = "/api/v1/deadlines",
    responses(
        (status = 200, description = "Deadlines sorted by due date", body = Vec<TaxDeadline>),
        (status = 404, description = "No profile onboarded yet"),
    ),
    tag = "Deadlines"
)]
pub async fn list_deadlines(State(state): State<AppState>) -> AppResult<Json<Vec<TaxDeadline>>> {
    let profile = state
        .profile
        .read()
        .await
        .clone()
        .ok_or_else(|| AppError::NotFound("Business profile not onboarded yet".to_string()))?;

    let deadlines = DeadlineScheduler::generate_deadlines(&profile, Utc::now().date_naive())?;
    Ok(Json(deadlines))
}

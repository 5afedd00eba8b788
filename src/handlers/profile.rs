// src/handlers/profile.rs

use crate::{
    errors::{AppError, AppResult},
    models::{
        BusinessProfile, BusinessProfileBuilder, DashboardResponse, SaveProfileRequest, TaxStatus,
    },
    services::{
        classifier,
        deadlines::{DeadlineScheduler, VAT_THRESHOLD},
    },
    state::AppState,
};
use axum::{Json, extract::State};
use chrono::Utc;
use rust_decimal_macros::dec;
use tracing::info;

/// Fetch the stored business profile
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Current business profile", body = BusinessProfile),
        (status = 404, description = "No profile onboarded yet"),
    ),
    tag = "Profile"
)]
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<BusinessProfile>> {
    let profile = state.profile.read().await.clone();
    profile
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Business profile not onboarded yet".to_string()))
}

/// Onboard or edit the business profile. The stored record is replaced
/// wholesale — partial updates are not supported.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = SaveProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = BusinessProfile),
        (status = 400, description = "Invalid profile fields"),
    ),
    tag = "Profile"
)]
pub async fn save_profile(
    State(state): State<AppState>,
    Json(body): Json<SaveProfileRequest>,
) -> AppResult<Json<BusinessProfile>> {
    let mut builder = BusinessProfileBuilder::new()
        .company_name(body.company_name)
        .sector(body.sector)
        .annual_turnover(body.annual_turnover)
        .employee_count(body.employee_count);
    if let Some(date) = body.registration_date {
        builder = builder.registration_date(date);
    }
    let profile = builder.build()?;

    state.store.save(&profile).await?;
    *state.profile.write().await = Some(profile.clone());

    info!("Business profile saved for '{}'", profile.company_name);
    Ok(Json(profile))
}

/// Classify the stored profile's turnover into its business tier
#[utoipa::path(
    get,
    path = "/api/v1/profile/tax-status",
    responses(
        (status = 200, description = "Business tier and CIT rate", body = TaxStatus),
        (status = 404, description = "No profile onboarded yet"),
    ),
    tag = "Profile"
)]
pub async fn get_tax_status(State(state): State<AppState>) -> AppResult<Json<TaxStatus>> {
    let profile = state
        .profile
        .read()
        .await
        .clone()
        .ok_or_else(|| AppError::NotFound("Business profile not onboarded yet".to_string()))?;

    Ok(Json(classifier::classify(profile.annual_turnover)))
}

/// Dashboard summary: tier, turnover, threshold proximity and the next
/// statutory deadline
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Compliance dashboard", body = DashboardResponse),
        (status = 404, description = "No profile onboarded yet"),
    ),
    tag = "Profile"
)]
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let profile = state
        .profile
        .read()
        .await
        .clone()
        .ok_or_else(|| AppError::NotFound("Business profile not onboarded yet".to_string()))?;

    let turnover = profile.annual_turnover;
    let today = Utc::now().date_naive();
    let next_deadline = DeadlineScheduler::generate_deadlines(&profile, today)?
        .into_iter()
        .next();

    Ok(Json(DashboardResponse {
        company_name: profile.company_name,
        tax_status: classifier::classify(turnover),
        annual_turnover: turnover,
        employee_count: profile.employee_count,
        vat_threshold_approaching: turnover >= VAT_THRESHOLD * dec!(0.9)
            && turnover < VAT_THRESHOLD,
        cit_threshold_approaching: turnover >= dec!(20_000_000) && turnover < dec!(25_000_000),
        next_deadline,
    }))
}

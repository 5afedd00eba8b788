// src/handlers/paye.rs

use crate::{
    errors::AppResult,
    models::{CalculatePayeBatchRequest, CalculatePayeRequest, Employee, PayeResult},
    services::paye::PayeEngine,
    state::AppState,
};
use axum::{Json, extract::State};
use uuid::Uuid;

/// Compute annual PAYE withholding for one employee
#[utoipa::path(
    post,
    path = "/api/v1/paye/calculate",
    request_body = CalculatePayeRequest,
    responses(
        (status = 200, description = "PAYE breakdown", body = PayeResult),
        (status = 400, description = "Negative salary"),
    ),
    tag = "PAYE"
)]
pub async fn calculate_paye(
    State(_state): State<AppState>,
    Json(body): Json<CalculatePayeRequest>,
) -> AppResult<Json<PayeResult>> {
    let employee = Employee {
        id: Uuid::new_v4(),
        name: body.name,
        annual_gross_salary: body.annual_gross_salary,
    };
    Ok(Json(PayeEngine::compute_paye(&employee)?))
}

/// Compute PAYE for a list of employees in one call. Fails as a whole
/// if any salary is negative — no partial results.
#[utoipa::path(
    post,
    path = "/api/v1/paye/calculate-batch",
    request_body = CalculatePayeBatchRequest,
    responses(
        (status = 200, description = "PAYE breakdown per employee", body = Vec<PayeResult>),
        (status = 400, description = "Negative salary in the batch"),
    ),
    tag = "PAYE"
)]
pub async fn calculate_paye_batch(
    State(_state): State<AppState>,
    Json(body): Json<CalculatePayeBatchRequest>,
) -> AppResult<Json<Vec<PayeResult>>> {
    let results = body
        .employees
        .into_iter()
        .map(|e| {
            PayeEngine::compute_paye(&Employee {
                id: Uuid::new_v4(),
                name: e.name,
                annual_gross_salary: e.annual_gross_salary,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Json(results))
}

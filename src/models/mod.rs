// src/models/mod.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

// ─── Business Profile ─────────────────────────────────────────────────────────

/// Snapshot of one business. Replaced wholesale on edit — there is no
/// partial mutation of a stored profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusinessProfile {
    pub company_name: String,
    pub registration_date: NaiveDate,
    pub annual_turnover: Decimal,
    pub sector: String,
    pub employee_count: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveProfileRequest {
    pub company_name: String,
    /// Defaults to today when omitted (onboarding does not ask for it)
    pub registration_date: Option<NaiveDate>,
    pub annual_turnover: Decimal,
    pub sector: String,
    pub employee_count: u32,
}

/// Accumulates onboarding fields across steps and only yields a
/// validated profile on completion.
#[derive(Debug, Default, Clone)]
pub struct BusinessProfileBuilder {
    company_name: Option<String>,
    registration_date: Option<NaiveDate>,
    annual_turnover: Option<Decimal>,
    sector: Option<String>,
    employee_count: Option<u32>,
}

impl BusinessProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    pub fn registration_date(mut self, date: NaiveDate) -> Self {
        self.registration_date = Some(date);
        self
    }

    pub fn annual_turnover(mut self, turnover: Decimal) -> Self {
        self.annual_turnover = Some(turnover);
        self
    }

    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn employee_count(mut self, count: u32) -> Self {
        self.employee_count = Some(count);
        self
    }

    pub fn build(self) -> Result<BusinessProfile, AppError> {
        let company_name = self
            .company_name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Company name is required".to_string()))?;

        let annual_turnover = self
            .annual_turnover
            .ok_or_else(|| AppError::Validation("Annual turnover is required".to_string()))?;
        if annual_turnover.is_sign_negative() {
            return Err(AppError::Validation(
                "Annual turnover cannot be negative".to_string(),
            ));
        }

        Ok(BusinessProfile {
            company_name,
            registration_date: self
                .registration_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            annual_turnover,
            sector: self.sector.unwrap_or_else(|| "General Trade".to_string()),
            employee_count: self.employee_count.unwrap_or(0),
        })
    }
}

// ─── Employee & PAYE ──────────────────────────────────────────────────────────

/// Transient calculation input — employees are not persisted anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub annual_gross_salary: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculatePayeRequest {
    pub name: String,
    pub annual_gross_salary: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CalculatePayeBatchRequest {
    pub employees: Vec<CalculatePayeRequest>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PayeResult {
    pub employee_id: Uuid,
    pub annual_gross: Decimal,
    /// Consolidated Relief Allowance
    pub cra: Decimal,
    pub taxable_income: Decimal,
    pub annual_tax: Decimal,
    pub monthly_tax: Decimal,
    /// Percentage of gross, 0 when gross is 0
    pub effective_rate: Decimal,
}

// ─── Tax Deadlines ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DeadlineType {
    #[serde(rename = "VAT")]
    Vat,
    #[serde(rename = "CIT")]
    Cit,
    #[serde(rename = "PAYE")]
    Paye,
    #[serde(rename = "WHT")]
    Wht,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Pending,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaxDeadline {
    pub id: Uuid,
    pub title: String,
    pub due_date: NaiveDate,
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,
    pub status: DeadlineStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    pub description: String,
}

// ─── Tax Status ───────────────────────────────────────────────────────────────

/// Derived classification of a turnover figure — computed on demand,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaxStatus {
    pub label: String,
    pub cit_rate: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub company_name: String,
    pub tax_status: TaxStatus,
    pub annual_turnover: Decimal,
    pub employee_count: u32,
    /// Turnover is within 90% of the 25M VAT registration threshold
    pub vat_threshold_approaching: bool,
    /// Turnover is in the 20M–25M band approaching the CIT small-company limit
    pub cit_threshold_approaching: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_deadline: Option<TaxDeadline>,
}

// ─── Document Vault ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub name: String,
    pub doc_type: String,
    pub upload_date: DateTime<Utc>,
    pub summary: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadDocumentRequest {
    /// Raw text content of the document (invoice, receipt, TCC, ...)
    pub content: String,
    /// Optional display name; generated from the upload date when omitted
    pub name: Option<String>,
}

/// Structured fields extracted from a document by the AI collaborator.
/// Every field is best-effort — the model may omit any of them.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct DocumentAnalysis {
    pub date: Option<String>,
    pub amount: Option<Decimal>,
    pub vendor: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub summary: Option<String>,
}

// ─── AI Assistant ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskAssistantRequest {
    pub question: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AskAssistantResponse {
    pub answer: String,
    /// False when the AI service failed and a canned fallback was substituted
    pub from_model: bool,
}

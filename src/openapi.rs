// src/openapi.rs

use crate::models::{
    AskAssistantRequest, AskAssistantResponse, BusinessProfile, CalculatePayeBatchRequest,
    CalculatePayeRequest, DashboardResponse, DeadlineStatus, DeadlineType, DocumentAnalysis,
    DocumentRecord, Employee, PayeResult, SaveProfileRequest, TaxDeadline, TaxStatus,
    UploadDocumentRequest,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BizTax API",
        version = "0.1.0",
        description = "Tax-compliance API for Nigerian SMEs built with Rust and Axum. \
            Tracks statutory VAT, PAYE and CIT filing deadlines, computes progressive \
            PAYE withholding with Consolidated Relief Allowance, classifies businesses \
            into CIT tiers, and stores compliance documents with Gemini-generated \
            summaries.",
        contact(
            name = "BizTax Support",
            email = "support@yourcompany.com"
        ),
        license(name = "MIT")
    ),
    paths(
        // Profile
        crate::handlers::profile::save_profile,
        crate::handlers::profile::get_profile,
        crate::handlers::profile::get_tax_status,
        crate::handlers::profile::get_dashboard,
        // Compliance
        crate::handlers::deadlines::list_deadlines,
        crate::handlers::paye::calculate_paye,
        crate::handlers::paye::calculate_paye_batch,
        // Documents
        crate::handlers::documents::upload_document,
        crate::handlers::documents::list_documents,
        crate::handlers::documents::get_document,
        // Assistant
        crate::handlers::assistant::ask_assistant,
    ),
    components(
        schemas(
            BusinessProfile, SaveProfileRequest, TaxStatus, DashboardResponse,
            Employee, CalculatePayeRequest, CalculatePayeBatchRequest, PayeResult,
            TaxDeadline, DeadlineType, DeadlineStatus,
            DocumentRecord, DocumentAnalysis, UploadDocumentRequest,
            AskAssistantRequest, AskAssistantResponse,
        )
    ),
    tags(
        (name = "Profile", description = "Onboard the business and view its tax standing"),
        (name = "Deadlines", description = "Statutory VAT, PAYE and CIT filing deadlines"),
        (name = "PAYE", description = "Progressive income-tax withholding calculator"),
        (name = "Documents", description = "AI-analyzed compliance document vault"),
        (name = "Assistant", description = "BizTax Advisor tax Q&A"),
    )
)]
pub struct ApiDoc;

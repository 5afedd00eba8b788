use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse},
};
use serde_json::json;

/// Root handler — returns an HTML landing page with project info and links
pub async fn root_handler() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>BizTax API</title>
  <style>
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: 'Segoe UI', system-ui, sans-serif; background: #0f172a; color: #e2e8f0; min-height: 100vh; padding: 40px 20px; }
    .container { max-width: 860px; margin: 0 auto; }
    header { text-align: center; margin-bottom: 48px; }
    header h1 { font-size: 2.8rem; font-weight: 800; background: linear-gradient(135deg, #14b8a6, #0ea5e9); -webkit-background-clip: text; -webkit-text-fill-color: transparent; margin-bottom: 8px; }
    header p { color: #94a3b8; font-size: 1.1rem; }
    .badge { display: inline-block; background: #1e293b; border: 1px solid #334155; color: #38bdf8; padding: 4px 12px; border-radius: 20px; font-size: 0.8rem; margin-top: 12px; }
    .grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px; margin-bottom: 32px; }
    .card { background: #1e293b; border: 1px solid #334155; border-radius: 12px; padding: 20px; transition: border-color 0.2s; }
    .card:hover { border-color: #14b8a6; }
    .card h3 { font-size: 1rem; font-weight: 600; color: #f1f5f9; margin-bottom: 6px; }
    .card p { font-size: 0.875rem; color: #94a3b8; line-height: 1.5; }
    .card a { color: #38bdf8; text-decoration: none; font-weight: 500; display: inline-block; margin-top: 8px; font-size: 0.875rem; }
    .card a:hover { text-decoration: underline; }
    .routes { background: #1e293b; border: 1px solid #334155; border-radius: 12px; padding: 24px; }
    .routes h2 { font-size: 1.2rem; font-weight: 700; color: #f1f5f9; margin-bottom: 16px; }
    .route-group { margin-bottom: 20px; }
    .route-group h4 { font-size: 0.8rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: #64748b; margin-bottom: 8px; }
    .route-item { display: flex; align-items: flex-start; gap: 12px; padding: 8px 0; border-bottom: 1px solid #0f172a; }
    .route-item:last-child { border-bottom: none; }
    .method { font-size: 0.7rem; font-weight: 700; padding: 2px 8px; border-radius: 4px; min-width: 52px; text-align: center; font-family: monospace; }
    .get { background: #064e3b; color: #34d399; }
    .post { background: #1e3a5f; color: #60a5fa; }
    .put { background: #451a03; color: #fb923c; }
    .route-path { font-family: monospace; font-size: 0.85rem; color: #e2e8f0; flex: 1; }
    .route-desc { font-size: 0.8rem; color: #64748b; }
    footer { text-align: center; margin-top: 40px; color: #475569; font-size: 0.85rem; }
  </style>
</head>
<body>
<div class="container">
  <header>
    <h1>🇳🇬 BizTax API</h1>
    <p>Tax compliance for Nigerian SMEs — deadlines, PAYE and AI-assisted documents</p>
    <span class="badge">v0.1.0 · REST API · JSON</span>
  </header>

  <div class="grid">
    <div class="card">
      <h3>📖 API Documentation</h3>
      <p>Full interactive Swagger UI. Explore all endpoints, try requests, and view request/response schemas.</p>
      <a href="/docs">Open Swagger UI →</a>
    </div>
    <div class="card">
      <h3>❤️ Health Check</h3>
      <p>Confirm the service is running and whether a business profile has been onboarded.</p>
      <a href="/health">GET /health →</a>
    </div>
    <div class="card">
      <h3>🧮 PAYE Engine</h3>
      <p>Progressive Finance Act 2020 tax bands with Consolidated Relief Allowance, computed exactly in decimal.</p>
    </div>
    <div class="card">
      <h3>✨ AI Document Vault</h3>
      <p>Paste invoice or receipt text and Gemini extracts the date, amount, vendor and a summary.</p>
    </div>
  </div>

  <div class="routes">
    <h2>🗺️ All API Routes</h2>

    <div class="route-group">
      <h4>Profile</h4>
      <div class="route-item"><span class="method put">PUT</span><span class="route-path">/api/v1/profile</span><span class="route-desc">Onboard or replace the business profile</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/profile</span><span class="route-desc">Fetch the stored profile</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/profile/tax-status</span><span class="route-desc">Business tier and CIT rate</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/dashboard</span><span class="route-desc">Compliance overview and next deadline</span></div>
    </div>

    <div class="route-group">
      <h4>Compliance</h4>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/deadlines</span><span class="route-desc">Upcoming VAT / PAYE / CIT filing deadlines</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/paye/calculate</span><span class="route-desc">PAYE breakdown for one employee</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/paye/calculate-batch</span><span class="route-desc">PAYE for a list of employees</span></div>
    </div>

    <div class="route-group">
      <h4>Documents &amp; Assistant</h4>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/documents</span><span class="route-desc">List vault documents</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/documents</span><span class="route-desc">Analyze and store a document</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/documents/:id</span><span class="route-desc">Get a specific document</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/assistant/ask</span><span class="route-desc">Ask the BizTax Advisor a question</span></div>
    </div>
  </div>

  <footer>
    <p>Built with 🦀 Rust · Axum · Gemini</p>
  </footer>
</div>
</body>
</html>"#,
    )
}

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let onboarded = state.profile.read().await.is_some();
    Json(json!({
        "status": "healthy",
        "profile_onboarded": onboarded,
        "service": "biztax-api",
        "version": "0.1.0"
    }))
}

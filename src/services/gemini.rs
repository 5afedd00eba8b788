// src/services/gemini.rs

use crate::{config::Config, errors::AppError, models::DocumentAnalysis};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Canned reply returned by callers when the assistant is unreachable.
pub const ASSISTANT_FALLBACK: &str =
    "I'm having trouble connecting to the tax database right now. Please try again later.";

const SYSTEM_INSTRUCTION: &str = "You are an expert Nigerian Tax Consultant for SMEs called \
'BizTax Advisor'. Your goal is to explain complex tax concepts (CIT, VAT, PAYE, WHT) simply. \
Always cite relevant Nigerian tax laws (e.g., Finance Act 2023, CITA, PITA) when possible but \
keep it practical. If the user asks about specific calculations, guide them to use the app's \
calculator but explain the logic.";

#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    config: Arc<Config>,
}

// ─── Gemini generateContent wire types ────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|p| p.text)
    }
}

impl GeminiService {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn generate(
        &self,
        prompt: String,
        system_instruction: Option<String>,
        json_response: bool,
    ) -> Result<String, AppError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.gemini_base_url, self.config.gemini_model
        );

        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: system_instruction.map(|text| Content {
                parts: vec![Part { text }],
            }),
            generation_config: json_response.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.gemini_api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Gemini(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::Gemini(format!(
                "Gemini returned {}",
                resp.status()
            )));
        }

        let body: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Gemini(e.to_string()))?;

        body.into_text()
            .ok_or_else(|| AppError::Gemini("No candidate text in response".to_string()))
    }

    /// Free-text tax Q&A with the BizTax Advisor persona.
    pub async fn ask_tax_assistant(
        &self,
        question: &str,
        context: Option<&str>,
    ) -> Result<String, AppError> {
        let instruction = format!(
            "{SYSTEM_INSTRUCTION}\nCurrent Context: {}",
            context.unwrap_or("General inquiry")
        );
        self.generate(question.to_string(), Some(instruction), false)
            .await
    }

    /// Extract structured fields from raw document text. The model is
    /// asked for bare JSON; anything unparseable is a Gemini error the
    /// caller may swallow with a placeholder analysis.
    pub async fn analyze_document(
        &self,
        document_text: &str,
    ) -> Result<DocumentAnalysis, AppError> {
        let prompt = format!(
            "Analyze this text from a business document (receipt, invoice, or tax certificate). \
             Extract the following if present:\n\
             1. Date\n2. Total Amount\n3. Vendor/Payer Name\n\
             4. Document Type (Invoice, Receipt, TCC, etc.)\n5. A brief summary.\n\n\
             Return the result as a valid JSON object with keys: date, amount, vendor, type, \
             summary. Do not wrap in markdown code blocks. Just the raw JSON string.\n\n\
             Document Text:\n{document_text}"
        );

        let raw = self.generate(prompt, None, true).await?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Gemini(format!("Unparseable analysis JSON: {e}")))
    }
}

use crate::config::ApiKey;
use crate::error::AppError;
use crate::http::HttpTransport;
use crate::stats::model::PlayerStatistics;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use super::prompt::build_prompt;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Turns player statistics into a coaching write-up via Gemini.
pub struct InsightGenerator {
    transport: Arc<dyn HttpTransport>,
    model: String,
}

impl InsightGenerator {
    pub fn new(transport: Arc<dyn HttpTransport>, model: impl Into<String>) -> Self {
        InsightGenerator {
            transport,
            model: model.into(),
        }
    }

    /// Any failure, transport or content, is reported as a service error.
    pub fn generate(&self, stats: &PlayerStatistics, api_key: &ApiKey) -> Result<String, AppError> {
        let prompt = build_prompt(stats);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };
        let body =
            serde_json::to_string(&request).map_err(|e| AppError::Service(e.to_string()))?;

        let url = format!("{}/{}:generateContent", GEMINI_ENDPOINT, self.model);
        info!(model = %self.model, "requesting coaching analysis");

        let response = self
            .transport
            .post_json(&url, &[(GEMINI_KEY_HEADER, api_key.expose())], &body)
            .map_err(|e| {
                warn!(error = %e, "analysis request failed");
                AppError::Service(e.to_string())
            })?;

        extract_text(&response)
    }
}

fn extract_text(body: &str) -> Result<String, AppError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AppError::Service(e.to_string()))?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AppError::Service("response contained no text".to_string()));
    }
    Ok(text)
}

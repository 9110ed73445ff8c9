//! HTTP client for the Gemini generateContent API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SummaryError};

/// Gemini API base URL.
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for patient summaries.
const MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini text-generation API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

#[derive(Serialize)]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SummaryError::Network)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| SummaryError::MissingApiKey)?;
        Self::new(api_key)
    }

    fn generate_url(&self) -> String {
        format!("{GEMINI_API_URL}/models/{MODEL}:generateContent")
    }

    /// Send a prompt and return the generated text.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        debug!(model = MODEL, "requesting summary generation");

        let body = GenerateContentBody {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(SummaryError::Network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummaryError::Api { status, message });
        }

        let payload: GenerateContentResponse = response.json().map_err(SummaryError::Network)?;
        extract_text(payload)
    }
}

/// Pull the first text part out of the response payload.
fn extract_text(payload: GenerateContentResponse) -> Result<String> {
    payload
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .filter(|text| !text.is_empty())
        .ok_or(SummaryError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_a_candidate_payload() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Dear family, the patient is stable."}]}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            extract_text(payload).unwrap(),
            "Dear family, the patient is stable."
        );
    }

    #[test]
    fn empty_candidates_are_an_error() {
        let payload: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(
            extract_text(payload),
            Err(SummaryError::EmptyResponse)
        ));
    }

    #[test]
    fn missing_candidates_field_is_tolerated() {
        let payload: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_text(payload),
            Err(SummaryError::EmptyResponse)
        ));
    }
}

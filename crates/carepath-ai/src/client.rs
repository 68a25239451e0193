//! Generative Language API client.
//!
//! One blocking `generateContent` call per prompt. The API key travels in
//! the `x-goog-api-key` header so it never ends up in a request URL.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SummarizerSettings;
use crate::error::{AiError, Result};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// A backend that turns a prompt into text.
pub trait TextGenerator {
    /// Generate text for `prompt`. `Ok(None)` means the backend answered
    /// without any text.
    fn generate(&self, prompt: &str) -> Result<Option<String>>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub(crate) fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Client for the Generative Language `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client for `settings`. The key must already be resolved.
    pub fn new(settings: &SummarizerSettings, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: api_key.into(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<Option<String>> {
        debug!(model = %self.model, chars = prompt.chars().count(), "requesting generation");
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };
        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.api_key)
            .header(USER_AGENT, concat!("carepath/", env!("CARGO_PKG_VERSION")))
            .json(&body)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api { status, message });
        }

        let bytes = response.bytes()?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.text())
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let settings = SummarizerSettings {
            endpoint: "http://localhost:9/v1beta/".to_string(),
            ..SummarizerSettings::default()
        };
        let client = GeminiClient::new(&settings, "k").unwrap();
        assert_eq!(
            client.generate_url(),
            "http://localhost:9/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"你好"},{"text":"，世界"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("你好，世界"));
    }

    #[test]
    fn test_response_without_text() {
        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(empty.text(), None);
        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.text(), None);
        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_transport_error_omits_key() {
        let settings = SummarizerSettings {
            endpoint: "http://127.0.0.1:9/v1beta".to_string(),
            timeout_secs: 2,
            ..SummarizerSettings::default()
        };
        let client = GeminiClient::new(&settings, "SECRET-KEY-123").unwrap();
        let err = client.generate("hi").unwrap_err();
        assert!(matches!(err, AiError::Network(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
        assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = GeminiClient::new(&SummarizerSettings::default(), "secret-key").unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }
}

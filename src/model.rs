//! External model collaborator: the Gemini `generateContent` client.
//!
//! Handlers talk to the model through the [`ChatModel`] trait so the
//! generation backend can be swapped (or stubbed in tests). The single
//! production implementation is [`GeminiClient`].

use crate::config::GeminiConfig;
use crate::history::Content;
use crate::prompt::SYSTEM_PROMPT;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// The one upstream defect we classify: Gemini rejecting a history that
/// does not open with a user turn. Detected by message-content inspection.
const HISTORY_SHAPE_MARKER: &str = "First content should be with role";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model rejected the conversation history shape")]
    HistoryShape,

    #[error("model API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}

/// A generative chat model that turns a history plus a new user message
/// into free-form reply text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, history: Vec<Content>, message: &str) -> Result<String, ModelError>;
}

/// Gemini REST client (`models/{model}:generateContent`, non-streaming).
///
/// No timeout or retry is layered on top of reqwest's transport defaults;
/// a hung upstream call blocks that request.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    max_output_tokens: u32,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(cfg: &GeminiConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            model: cfg.model.clone(),
            api_key,
            max_output_tokens: cfg.max_output_tokens,
            temperature: cfg.temperature,
        }
    }

    fn build_request_body(&self, history: &[Content], message: &str) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> =
            history.iter().map(|turn| json!(turn)).collect();
        contents.push(json!({"role": "user", "parts": [{"text": message}]}));

        json!({
            "systemInstruction": {"parts": [{"text": SYSTEM_PROMPT}]},
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.max_output_tokens,
                "temperature": self.temperature,
            },
        })
    }

    fn parse_response(body: &str) -> Result<String, ModelError> {
        let response: GenerateContentResponse = serde_json::from_str(body)
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::InvalidResponse("no candidates in response".into()))?;

        Ok(candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect())
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, history: Vec<Content>, message: &str) -> Result<String, ModelError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = self.build_request_body(&history, message);

        debug!("POST {} ({} history turns)", url, history.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            if raw.contains(HISTORY_SHAPE_MARKER) {
                return Err(ModelError::HistoryShape);
            }
            return Err(ModelError::Api {
                status: status.as_u16(),
                body: raw,
            });
        }

        Self::parse_response(&raw)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Content;

    fn test_client() -> GeminiClient {
        let cfg = GeminiConfig {
            model: "gemini-1.5-flash".to_string(),
            base_url: "http://example.com".to_string(),
            max_output_tokens: 300,
            temperature: 0.7,
        };
        GeminiClient::new(&cfg, "test-key".to_string())
    }

    #[test]
    fn build_request_body_appends_message_after_history() {
        let client = test_client();
        let history = vec![Content::user("hi"), Content::model("hello")];
        let body = client.build_request_body(&history, "book a demo");

        let contents = body.get("contents").and_then(|v| v.as_array()).unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "book a demo");

        let config = body.get("generationConfig").unwrap();
        assert_eq!(config["maxOutputTokens"], 300);

        let system = body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(system.contains("[SCHEDULE_MEETING]"));
    }

    #[test]
    fn parse_response_concatenates_candidate_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]}}]}"#;
        assert_eq!(GeminiClient::parse_response(body).unwrap(), "Hello there");
    }

    #[test]
    fn parse_response_rejects_empty_candidates() {
        let err = GeminiClient::parse_response(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidResponse(_)));
    }
}

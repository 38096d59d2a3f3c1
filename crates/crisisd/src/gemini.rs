//! Gemini HTTP client - the daemon's single outbound dependency.
//!
//! One call shape: a fixed system instruction plus a composed prompt, with
//! the response constrained to JSON text. Handlers depend on the
//! [`GenerativeModel`] trait so tests can substitute a canned double.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::Config;

/// Errors from a model invocation.
///
/// The variants exist for diagnostics only; callers never branch on them.
/// Every one resolves to the same per-capability fallback path.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("model provider returned {code}: {body}")]
    Status { code: u16, body: String },

    #[error("model returned no candidates")]
    EmptyResponse,

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Outbound generative-model capability.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Invoke the model with a system instruction and a prompt, requesting a
    /// JSON-formatted text reply. Returns the raw reply text.
    async fn generate_json(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ModelError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini `generateContent` REST API.
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_json(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ModelError> {
        // The key travels in the query string, so the URL must never be logged.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        info!(
            "[>]  Model call [{}] ({} prompt chars)",
            self.model,
            prompt.len()
        );

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(ModelError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::MalformedResponse(e.to_string()))?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .ok_or(ModelError::EmptyResponse)?;

        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        info!("[<]  Model response ({} chars)", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_carries_configured_model() {
        let config = Config {
            model: "gemini-2.0-flash".to_string(),
            ..Config::default()
        };
        let client = GeminiClient::new(&config);
        assert_eq!(client.model(), "gemini-2.0-flash");
    }

    #[test]
    fn request_serializes_to_gemini_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: "prompt".to_string(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: "system".to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert!(value["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn response_text_is_concatenated_from_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "{\"a\""}, {"text": ": 1}"}]}}
            ]
        }"#;
        let body: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text: String = body.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, r#"{"a": 1}"#);
    }

    #[test]
    fn empty_candidates_deserialize() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(body.candidates.is_empty());
    }
}

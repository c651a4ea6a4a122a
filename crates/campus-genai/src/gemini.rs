//! `generateContent` client for Gemini-style model APIs.

use std::time::Duration;

use async_trait::async_trait;
use campus_config::GenerationConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerationError;
use crate::generator::{PromptRequest, TextGenerator};
use crate::http::check_response;

pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: Option<f32>,
}

impl std::fmt::Debug for GeminiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGenerator")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiGenerator {
    /// Build a client from the `[generation]` config section.
    ///
    /// # Errors
    ///
    /// `GenerationError::Config` when no API key is set or a value is out of
    /// range, `GenerationError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let config = config.require()?;
        let http = reqwest::Client::builder()
            .user_agent("campus-hub/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String, GenerationError> {
        let body = GenerateRequest::new(request, self.temperature);
        debug!(model = %self.model, "sending generateContent request");
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let raw = check_response(resp).await?.text().await?;
        GenerateResponse::parse(&raw)?.into_text()
    }
}

// -- wire types ---------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "GenerationSettings::is_empty")]
    generation_config: GenerationSettings,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerationSettings {
    const fn is_empty(&self) -> bool {
        self.response_mime_type.is_none() && self.temperature.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl GenerateRequest {
    fn new(request: &PromptRequest, default_temperature: Option<f32>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config: GenerationSettings {
                response_mime_type: request.json_output.then_some("application/json"),
                temperature: request.temperature.or(default_temperature),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// A 2xx body that is not a `generateContent` reply is malformed, not an
    /// HTTP failure.
    fn parse(raw: &str) -> Result<Self, GenerationError> {
        serde_json::from_str(raw)
            .map_err(|err| GenerationError::Malformed(format!("unreadable reply body: {err}")))
    }

    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, GenerationError> {
        let content = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .ok_or_else(|| GenerationError::Malformed("response has no candidates".into()))?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            return Err(GenerationError::Malformed(
                "first candidate has no text".into(),
            ));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let request = PromptRequest::json("List three questions.");
        let body = serde_json::to_value(GenerateRequest::new(&request, Some(0.5))).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "List three questions." }] }],
                "generationConfig": { "responseMimeType": "application/json", "temperature": 0.5 }
            })
        );
    }

    #[test]
    fn plain_text_request_omits_generation_config() {
        let request = PromptRequest {
            prompt: "hi".into(),
            json_output: false,
            temperature: None,
        };
        let body = serde_json::to_value(GenerateRequest::new(&request, None)).unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn text_parts_are_joined() {
        let reply: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"questions\":" }, { "text": "[\"Q1\"]}" }] }
            }]
        }))
        .unwrap();
        assert_eq!(reply.into_text().unwrap(), "{\"questions\":[\"Q1\"]}");
    }

    #[test]
    fn no_candidates_is_malformed() {
        let reply: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            reply.into_text(),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = GenerateResponse::parse("<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)), "{err:?}");

        let reply = GenerateResponse::parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.into_text().unwrap(), "ok");
    }

    #[tokio::test]
    async fn html_reply_from_server_is_malformed() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .body("<html>maintenance</html>".to_string())
                .unwrap(),
        );
        let raw = check_response(resp).await.unwrap().text().await.unwrap();
        assert!(matches!(
            GenerateResponse::parse(&raw),
            Err(GenerationError::Malformed(_))
        ));
    }

    #[test]
    fn unconfigured_client_is_refused() {
        let err = GeminiGenerator::from_config(&GenerationConfig::default()).unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
    }

    #[test]
    fn endpoint_uses_model_name() {
        let config = GenerationConfig {
            api_key: "test-key".into(),
            base_url: "https://models.example.test/v1beta/".into(),
            ..GenerationConfig::default()
        };
        let generator = GeminiGenerator::from_config(&config).unwrap();
        assert_eq!(
            generator.endpoint(),
            "https://models.example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}

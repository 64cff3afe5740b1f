//! Gemini Client
//!
//! Client for the Google Generative Language `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{GeminiConfig, ModelConfig};
use crate::error::{AppError, AppResult};
use crate::external::model::{GenerationRequest, GenerativeModel};

/// Client for a single Gemini model
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    safety_filters: bool,
    http_client: Client,
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Response body from `generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    status: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            safety_filters: false,
            http_client,
        })
    }

    /// Create a client for one flow from validated configuration
    pub fn from_config(gemini: &GeminiConfig, model: &ModelConfig) -> AppResult<Self> {
        let api_key = model
            .api_key()
            .ok_or_else(|| AppError::Configuration(format!("No API key for {}", model.model)))?;

        let client = Self::new(
            gemini.base_url.clone(),
            api_key.to_string(),
            model.model.clone(),
            Duration::from_secs(gemini.timeout_secs),
        )?;

        Ok(client.with_safety_filters(model.safety_filters))
    }

    /// Block harassment and hate speech at medium probability and above
    pub fn with_safety_filters(mut self, enabled: bool) -> Self {
        self.safety_filters = enabled;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_body<'a>(&self, request: &'a GenerationRequest) -> GenerateContentRequest<'a> {
        let mut parts = vec![Part::Text {
            text: &request.prompt,
        }];
        if let Some(image) = &request.image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type(),
                    data: STANDARD.encode(&image.data),
                },
            });
        }

        let safety_settings = if self.safety_filters {
            vec![
                SafetySetting {
                    category: "HARM_CATEGORY_HARASSMENT",
                    threshold: "BLOCK_MEDIUM_AND_ABOVE",
                },
                SafetySetting {
                    category: "HARM_CATEGORY_HATE_SPEECH",
                    threshold: "BLOCK_MEDIUM_AND_ABOVE",
                },
            ]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: request
                .temperature
                .map(|temperature| GenerationConfig { temperature }),
            safety_settings,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String> {
        let body = self.build_body(&request);

        tracing::debug!(
            model = %self.model,
            has_image = request.image.is_some(),
            temperature = ?request.temperature,
            "Sending generateContent request"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ModelError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelError(describe_api_error(status, &body)));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelError(format!("Failed to parse response: {}", e)))?;

        extract_text(result)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Turn a non-2xx reply into a readable message
fn describe_api_error(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("API returned {} ({}): {}", status, code, envelope.error.message),
            None => format!("API returned {}: {}", status, envelope.error.message),
        },
        Err(_) => format!("API returned {}: {}", status, body),
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateContentResponse) -> AppResult<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(AppError::ModelError(format!("Prompt was blocked: {}", reason)));
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(AppError::ModelError(format!(
            "Model returned no text (finish reason: {})",
            reason
        )));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::model::InlineImage;
    use shared::ImageFormat;

    fn client() -> GeminiClient {
        GeminiClient::new(
            "https://example.test/v1beta/".to_string(),
            "key".to_string(),
            "gemini-2.5-flash".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(
            client().endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_body_with_image_and_temperature() {
        let request = GenerationRequest::text("Classify this soil")
            .with_image(Some(InlineImage::new(ImageFormat::Png, vec![1, 2, 3])))
            .with_temperature(0.1);
        let client = client().with_safety_filters(true);
        let body = serde_json::to_value(client.build_body(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Classify this soil");
        assert_eq!(
            body["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(body["contents"][0]["parts"][1]["inlineData"]["data"], "AQID");
        assert!((body["generationConfig"]["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_body_text_only_omits_optional_fields() {
        let body = serde_json::to_value(client().build_body(&GenerationRequest::text("hi"))).unwrap();
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 1);
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("safetySettings").is_none());
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Sandy "},{"text":"Soil\n"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Sandy Soil");
    }

    #[test]
    fn test_extract_text_reports_block_reason() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_extract_text_rejects_empty_candidate() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#).unwrap();
        let err = extract_text(response).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_describe_api_error_uses_envelope() {
        let message = describe_api_error(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        );
        assert_eq!(
            message,
            "API returned 429 Too Many Requests (RESOURCE_EXHAUSTED): Quota exceeded"
        );
    }
}

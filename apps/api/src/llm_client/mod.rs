/// LLM Client — the single point of entry for all Gemini API calls in JobPilot.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Handlers talk to the model through the `TextModel` trait carried in `AppState`.
///
/// One request per call: no retry, no backoff. Failures surface to the caller,
/// which decides on the fallback payload.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod json;
pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked by the model: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that turns a prompt into text. `GeminiClient` in production,
/// scripted models in tests.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: std::time::Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            model,
            base_url,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Makes a raw call to the Gemini API, returning the decoded response object.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let gemini_response: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(gemini_response)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response_text(response)
    }
}

/// Pulls the usable text out of a decoded response, mapping blocked prompts
/// and empty candidates to errors.
fn response_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.clone())
    {
        return Err(LlmError::Blocked(reason));
    }

    match response.text() {
        Some(text) => Ok(text),
        None => {
            let finish = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("none");
            warn!("Gemini returned no text (finish_reason={finish})");
            Err(LlmError::EmptyContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_text_joins_parts_of_first_candidate() {
        let response = decode(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Dear "}, {"text": "hiring team"}]}, "finishReason": "STOP"},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ],
                "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
            }"#,
        );
        assert_eq!(response_text(response).unwrap(), "Dear hiring team");
    }

    #[test]
    fn test_blocked_prompt_is_an_error() {
        let response = decode(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#);
        match response_text(response) {
            Err(LlmError::Blocked(reason)) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_no_candidates_is_empty_content() {
        let response = decode(r#"{"candidates": []}"#);
        assert!(matches!(response_text(response), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_whitespace_only_text_is_empty_content() {
        let response = decode(
            r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}, "finishReason": "MAX_TOKENS"}]}"#,
        );
        assert!(matches!(response_text(response), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new(
            "key".to_string(),
            "gemini-flash-latest".to_string(),
            "http://localhost:1234".to_string(),
            std::time::Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-flash-latest:generateContent"
        );
        assert_eq!(client.model(), "gemini-flash-latest");
    }
}

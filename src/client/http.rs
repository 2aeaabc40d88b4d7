//! OpenAI-compatible backend over raw HTTP.
//!
//! Posts to `{base}/chat/completions` and decodes the body by hand. Kept
//! interchangeable with the SDK backend for deployments that pin their own
//! HTTP stack.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use super::{parse_translations, AiClient, AiError};
use crate::config::{ConfigError, DEFAULT_BASE_URL};
use crate::types::{ClientOptions, Translation};

pub struct HttpAiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

/// Chat completion API request format.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

/// Chat completion API response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl HttpAiClient {
    /// Create a backend with an explicit key and base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a backend from `OPENAI_API_KEY` and `TRANSLATIONS_AI_BASE_URL`,
    /// same variables as the SDK backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
        let base_url =
            env::var("TRANSLATIONS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, base_url))
    }
}

#[async_trait]
impl AiClient for HttpAiClient {
    async fn translate(
        &self,
        prompt: &str,
        options: &ClientOptions,
    ) -> Result<Vec<Translation>, AiError> {
        let request = ChatRequest {
            model: options.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        };

        tracing::debug!(model = %options.model, "posting chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(options.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        millis: options.timeout.as_millis() as u64,
                    }
                } else {
                    AiError::Api(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::Api(e.to_string()))?;

        decode_body(status, &body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Turn a raw status and body into translations or a typed error.
fn decode_body(status: u16, body: &str) -> Result<Vec<Translation>, AiError> {
    if status != 200 {
        // Error bodies usually carry a structured message; fall back to the
        // raw body when they do not.
        if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(body) {
            return Err(AiError::Api(format!(
                "AI API error {status}: {}",
                api_error.error.message
            )));
        }
        return Err(AiError::Api(format!("AI API error {status}: {body}")));
    }

    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| AiError::Parse("no content in model reply".to_string()))?;

    parse_translations(&content)
}

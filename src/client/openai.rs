//! OpenAI-compatible backend speaking through the vendor SDK.

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use std::env;

use super::{parse_translations, AiClient, AiError};
use crate::config::{ConfigError, DEFAULT_BASE_URL};
use crate::types::{ClientOptions, Translation};

/// Backend calling the chat completion API through the SDK.
///
/// The request asks for a JSON-object reply; the prompt's contract line pins
/// the exact shape, and decoding is shared with the raw-HTTP backend.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    /// Create a backend with an explicit key and base URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.into())
            .with_api_base(base_url.into());
        Self {
            client: Client::with_config(config),
        }
    }

    /// Create a backend from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key for the backend
    ///
    /// Optional:
    /// - `TRANSLATIONS_AI_BASE_URL`: API base URL (default:
    ///   "https://api.openai.com/v1")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;
        let base_url =
            env::var("TRANSLATIONS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, base_url))
    }

    fn user_message(prompt: &str) -> Result<ChatCompletionRequestMessage, AiError> {
        ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.to_string())
            .build()
            .map(Into::into)
            .map_err(|e| AiError::Api(format!("failed to build user message: {e}")))
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn translate(
        &self,
        prompt: &str,
        options: &ClientOptions,
    ) -> Result<Vec<Translation>, AiError> {
        let messages = vec![Self::user_message(prompt)?];

        let mut req_builder = CreateChatCompletionRequestArgs::default();
        req_builder
            .model(&options.model)
            .messages(messages)
            .response_format(ResponseFormat::JsonObject);
        let request = req_builder.build().map_err(|e| AiError::Api(e.to_string()))?;

        tracing::debug!(model = %options.model, "calling chat completion API");

        let response = tokio::time::timeout(options.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| AiError::Timeout {
                millis: options.timeout.as_millis() as u64,
            })?
            .map_err(|e| AiError::Api(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AiError::Parse("no content in model reply".to_string()))?;

        parse_translations(&content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

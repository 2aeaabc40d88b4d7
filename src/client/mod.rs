//! Model backend abstraction.
//!
//! One capability: send a finished prompt, get language-tagged suggestions
//! back. Concrete backends differ only in transport (vendor SDK vs. raw
//! HTTP) and are interchangeable behind the trait; tests script the fake.

mod fake;
mod http;
mod openai;

pub use fake::FakeAiClient;
pub use http::HttpAiClient;
pub use openai::OpenAiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ConfigError;
use crate::types::{ClientOptions, Translation, TranslationsResponse};

/// Error type for backend calls.
#[derive(Debug, Error)]
pub enum AiError {
    /// The backend rejected the call or the transport failed.
    #[error("AI request failed: {0}")]
    Api(String),

    /// The call did not finish within the configured bound.
    #[error("AI call exceeded {millis} ms")]
    Timeout { millis: u64 },

    /// The reply arrived but could not be decoded into translations.
    #[error("Failed to parse AI response: {0}")]
    Parse(String),

    /// The backend is missing required configuration.
    #[error("AI backend is not configured: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for model backends.
///
/// Implementations hold no per-request state and are safe to share across
/// concurrent editor actions. One prompt in, one bounded call out: exceeding
/// `options.timeout` is a `Timeout` error, never a hang.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send a prompt and return the model's suggestions in reply order.
    async fn translate(
        &self,
        prompt: &str,
        options: &ClientOptions,
    ) -> Result<Vec<Translation>, AiError>;

    /// Backend name for logging, e.g. "openai" or "fake".
    fn name(&self) -> &'static str;
}

/// Decode an assistant reply into translations.
///
/// Accepts the `{"translations": [..]}` object the prompt asks for, and
/// falls back to a bare array of `{lang, description}` objects, which some
/// models emit despite the contract line.
pub(crate) fn parse_translations(content: &str) -> Result<Vec<Translation>, AiError> {
    let content = content.trim();
    if let Ok(response) = serde_json::from_str::<TranslationsResponse>(content) {
        return Ok(response.translations);
    }
    serde_json::from_str::<Vec<Translation>>(content)
        .map_err(|e| AiError::Parse(format!("unexpected reply shape: {e}")))
}

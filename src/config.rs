//! Feature configuration, read from environment variables.

use std::env;
use thiserror::Error;

/// Default base URL for OpenAI-compatible backends.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default bound on one backend call, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Configuration snapshot for the translation service.
///
/// Read once at wiring time and passed in explicitly, so the flow stays a
/// function of its inputs plus this value.
#[derive(Debug, Clone)]
pub struct TranslationsAiConfig {
    /// Master switch for the whole feature. Off by default.
    pub enabled: bool,
    /// Skip the backend entirely and synthesize placeholder suggestions.
    pub mock_mode: bool,
    /// Model identifier passed through to the backend.
    pub model: String,
    /// Upper bound on one backend call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for TranslationsAiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mock_mode: false,
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslationsAiConfig {
    /// Load the snapshot from environment variables.
    ///
    /// All variables are optional:
    /// - `TRANSLATIONS_AI_ENABLED`: set to "true" or "1" to switch the
    ///   feature on (default: off)
    /// - `TRANSLATIONS_AI_MOCK`: set to "true" or "1" for mock mode
    ///   (default: off)
    /// - `TRANSLATIONS_AI_MODEL`: model identifier (default: "gpt-4o-mini")
    /// - `TRANSLATIONS_AI_TIMEOUT_MS`: backend call bound in milliseconds
    ///   (default: 20000)
    pub fn from_env() -> Self {
        let enabled = env_flag("TRANSLATIONS_AI_ENABLED");
        let mock_mode = env_flag("TRANSLATIONS_AI_MOCK");
        let model =
            env::var("TRANSLATIONS_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_ms = env::var("TRANSLATIONS_AI_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            enabled,
            mock_mode,
            model,
            timeout_ms,
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|v| v == "true" || v == "1").unwrap_or(false)
}

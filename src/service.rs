//! Orchestration of the enhance/translate flow for one description.

use std::sync::Arc;
use std::time::Duration;

use crate::client::{AiClient, OpenAiClient};
use crate::config::{ConfigError, TranslationsAiConfig};
use crate::error::TranslateError;
use crate::locale::resolve_targets;
use crate::prompt::build_prompt;
use crate::types::{ClientOptions, PromptOptions, Translation};

/// Top-level service: validates the request, resolves targets, builds the
/// prompt, and makes one bounded backend call (or synthesizes mock
/// suggestions).
///
/// Holds only the backend handle and the config snapshot, so one instance is
/// safe to share across concurrent editor actions.
pub struct TranslationsAiService {
    client: Arc<dyn AiClient>,
    config: TranslationsAiConfig,
}

impl TranslationsAiService {
    pub fn new(client: Arc<dyn AiClient>, config: TranslationsAiConfig) -> Self {
        Self { client, config }
    }

    /// Wire the SDK backend from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = TranslationsAiConfig::from_env();
        let client = Arc::new(OpenAiClient::from_env()?);
        Ok(Self::new(client, config))
    }

    /// Whether the feature flag allows any work.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Improve the source description in its own language, then translate
    /// the improved text into every supported locale. The source language
    /// leads the result.
    pub async fn enhance_description(
        &self,
        source_text: &str,
        source_language: &str,
        supported_locales: &[String],
        options: PromptOptions,
    ) -> Result<Vec<Translation>, TranslateError> {
        let options = PromptOptions {
            enhance_source: true,
            ..options
        };
        self.process(source_text, source_language, supported_locales, &options)
            .await
    }

    /// Translate the source description verbatim into the other supported
    /// locales. The source language itself is not re-emitted.
    pub async fn translate_description(
        &self,
        source_text: &str,
        source_language: &str,
        supported_locales: &[String],
        options: PromptOptions,
    ) -> Result<Vec<Translation>, TranslateError> {
        let options = PromptOptions {
            enhance_source: false,
            ..options
        };
        self.process(source_text, source_language, supported_locales, &options)
            .await
    }

    /// Run the full flow for one request.
    ///
    /// The flow is linear: disabled check, source check, target resolution,
    /// then either the mock branch or prompt build plus one bounded backend
    /// call. Either the full ordered suggestion list comes back or a typed
    /// error; never a partial result, never a retry.
    pub async fn process(
        &self,
        source_text: &str,
        source_language: &str,
        supported_locales: &[String],
        options: &PromptOptions,
    ) -> Result<Vec<Translation>, TranslateError> {
        if !self.config.enabled {
            return Err(TranslateError::FeatureDisabled);
        }
        if source_text.trim().is_empty() {
            return Err(TranslateError::EmptySource {
                locale: source_language.to_string(),
            });
        }

        let base_language = options.source_language.as_deref().unwrap_or(source_language);
        let targets = if options.target_languages.is_empty() {
            resolve_targets(base_language, supported_locales, options.enhance_source)?
        } else {
            // Caller-picked targets are taken as already resolved; only
            // repeats are dropped, first occurrence wins.
            dedupe_preserving_order(&options.target_languages)
        };

        if targets.is_empty() {
            // Translate-only with no other catalog locales. Nothing to ask
            // the model for, and not an error.
            tracing::debug!(locale = %base_language, "no target locales to translate into");
            return Ok(Vec::new());
        }

        if self.config.mock_mode {
            return Ok(mock_translations(&targets, options.enhance_source));
        }

        let options = PromptOptions {
            target_languages: targets.clone(),
            ..options.clone()
        };
        let prompt = build_prompt(source_text, source_language, &options);

        let client_options = ClientOptions {
            model: self.config.model.clone(),
            timeout: Duration::from_millis(self.config.timeout_ms),
        };

        tracing::debug!(
            backend = self.client.name(),
            model = %client_options.model,
            targets = targets.len(),
            enhance = options.enhance_source,
            "invoking description model"
        );

        let translations = self.client.translate(&prompt, &client_options).await?;
        if translations.is_empty() {
            return Err(TranslateError::EmptyResult);
        }

        warn_on_language_mismatch(&targets, &translations);
        Ok(translations)
    }
}

/// Placeholder suggestions for mock mode. One per target, in target order,
/// with mode-specific wording.
fn mock_translations(targets: &[String], enhance_source: bool) -> Vec<Translation> {
    let kind = if enhance_source { "ENHANCED" } else { "TRANSLATED" };
    targets
        .iter()
        .map(|tag| {
            Translation::new(
                tag.clone(),
                format!("MOCK {kind} DESCRIPTION for {tag} - lorem ipsum"),
            )
        })
        .collect()
}

fn dedupe_preserving_order(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(tag) {
            out.push(tag.clone());
        }
    }
    out
}

/// Best-effort check that the reply covers exactly the requested languages.
/// Mismatches are logged and passed through untouched.
fn warn_on_language_mismatch(requested: &[String], returned: &[Translation]) {
    let missing: Vec<&str> = requested
        .iter()
        .filter(|tag| !returned.iter().any(|t| t.lang == **tag))
        .map(String::as_str)
        .collect();
    let unexpected: Vec<&str> = returned
        .iter()
        .filter(|t| !requested.contains(&t.lang))
        .map(|t| t.lang.as_str())
        .collect();
    if !missing.is_empty() || !unexpected.is_empty() {
        tracing::warn!(
            ?missing,
            ?unexpected,
            "model reply languages differ from requested targets"
        );
    }
}

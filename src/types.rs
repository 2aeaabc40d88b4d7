//! Request and response value types shared across the crate.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options shaping the prompt for one request.
///
/// Unset fields fall back to builder defaults, so hosts can pass
/// `PromptOptions::default()` and only override what the editor exposes.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// Base language of the source text (IETF BCP 47 tag). When unset, the
    /// locale the caller read the description under is used.
    pub source_language: Option<String>,
    /// Target language tags in output order. Empty means "resolve from the
    /// catalog's supported locales".
    pub target_languages: Vec<String>,
    /// Free-text style hint, e.g. "luxury" or "playful".
    pub tone: Option<String>,
    /// Optional word cap for each suggestion.
    pub max_length: Option<u32>,
    /// Improve the source text before translating instead of translating it
    /// verbatim.
    pub enhance_source: bool,
}

/// Transport options for one backend call, derived from configuration.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Model identifier passed through to the backend.
    pub model: String,
    /// Upper bound on the whole call.
    pub timeout: Duration,
}

/// One language-tagged suggestion returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// IETF BCP 47 language tag, e.g. "en" or "de-DE".
    pub lang: String,
    /// Suggested description text for that language.
    pub description: String,
}

impl Translation {
    pub fn new(lang: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            description: description.into(),
        }
    }
}

/// Object shape the model is instructed to reply with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationsResponse {
    pub translations: Vec<Translation>,
}

use thiserror::Error;

use crate::client::AiError;

/// Failures surfaced by the translation service.
///
/// Every failure is returned to the caller as a typed variant; nothing is
/// swallowed, degraded, or retried.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The feature flag is off. Checked before any other work.
    #[error("AI description feature is not enabled")]
    FeatureDisabled,

    /// The record has no description text under the source locale.
    #[error("Product description is empty for locale: {locale}")]
    EmptySource { locale: String },

    /// A caller-supplied value failed validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backend call failed; the cause text is preserved.
    #[error("AI call failed: {0}")]
    Ai(#[from] AiError),

    /// The backend replied successfully but with zero suggestions.
    #[error("AI returned no translations")]
    EmptyResult,
}

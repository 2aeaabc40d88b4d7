//! Catalog boundary contracts and the editor-action flow built on them.
//!
//! The service itself only sees strings. These traits describe the two
//! collaborators a host wires in, the record being edited and the locale
//! catalog, plus the glue that runs a full action: read, suggest, apply,
//! save.

use crate::error::TranslateError;
use crate::service::TranslationsAiService;
use crate::types::{PromptOptions, Translation};

/// Host-side handle to one record's localized descriptions.
pub trait CatalogRecord {
    /// Read the description stored under a locale, if any.
    fn description(&self, locale: &str) -> Option<String>;

    /// Replace the description stored under a locale.
    fn set_description(&mut self, locale: &str, text: &str);

    /// Persist pending changes.
    fn save(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Refresh the record from the store after a save.
    fn reload(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Host-side view of the locales descriptions can be stored under.
pub trait LocaleCatalog {
    /// Every supported locale tag, in no particular order.
    fn supported_locales(&self) -> Vec<String>;

    /// The locale the editor is currently showing.
    fn current_locale(&self) -> String;
}

/// Run the enhance flow for a record in the editor's current locale.
///
/// Reads the source description, asks the service for suggestions, and
/// returns them for review. Nothing is written back until
/// [`apply_suggestions`].
pub async fn enhance_record(
    service: &TranslationsAiService,
    record: &dyn CatalogRecord,
    locales: &dyn LocaleCatalog,
    options: PromptOptions,
) -> Result<Vec<Translation>, TranslateError> {
    run_flow(service, record, locales, options, true).await
}

/// Run the translate-only flow for a record in the editor's current locale.
pub async fn translate_record(
    service: &TranslationsAiService,
    record: &dyn CatalogRecord,
    locales: &dyn LocaleCatalog,
    options: PromptOptions,
) -> Result<Vec<Translation>, TranslateError> {
    run_flow(service, record, locales, options, false).await
}

async fn run_flow(
    service: &TranslationsAiService,
    record: &dyn CatalogRecord,
    locales: &dyn LocaleCatalog,
    options: PromptOptions,
    enhance_source: bool,
) -> Result<Vec<Translation>, TranslateError> {
    let locale = locales.current_locale();
    let source_text = record.description(&locale).unwrap_or_default();
    if source_text.trim().is_empty() {
        // A record with no text fails before the supported-locale lookup.
        return Err(TranslateError::EmptySource { locale });
    }

    let supported = locales.supported_locales();
    let options = PromptOptions {
        enhance_source,
        ..options
    };
    service
        .process(&source_text, &locale, &supported, &options)
        .await
}

/// Write accepted suggestions back onto the record, then save and reload it.
///
/// Suggestions are applied in order, one locale each; a repeated language
/// tag means last write wins.
pub fn apply_suggestions(
    record: &mut dyn CatalogRecord,
    suggestions: &[Translation],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    for suggestion in suggestions {
        record.set_description(&suggestion.lang, &suggestion.description);
    }
    record.save()?;
    record.reload()?;
    Ok(())
}

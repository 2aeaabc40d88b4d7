//! Target-language resolution against the catalog's supported locales.

use crate::error::TranslateError;

/// Resolve the ordered target list for one request.
///
/// Supported locales arrive as an unordered, possibly duplicated set; they
/// are deduplicated and sorted lexicographically so the same catalog always
/// yields the same list. In enhance mode the source language leads the list
/// (the improved base text must come back too); in translate-only mode it is
/// excluded entirely.
pub fn resolve_targets(
    source_language: &str,
    supported_locales: &[String],
    enhance_source: bool,
) -> Result<Vec<String>, TranslateError> {
    let source = source_language.trim();
    if source.is_empty() {
        return Err(TranslateError::InvalidArgument(
            "source language tag is empty".to_string(),
        ));
    }
    validate_tag(source)?;

    let mut targets: Vec<String> = supported_locales
        .iter()
        .map(String::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != source)
        .map(str::to_string)
        .collect();
    targets.sort();
    targets.dedup();

    if enhance_source {
        targets.insert(0, source.to_string());
    }

    Ok(targets)
}

/// Tags are compared as plain strings, so only the character set is checked.
fn validate_tag(tag: &str) -> Result<(), TranslateError> {
    if !tag
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::InvalidArgument(format!(
            "invalid characters in language tag: {tag}"
        )));
    }
    Ok(())
}

//! Prompt construction for the description model call.

use crate::types::PromptOptions;

/// Tone used when the caller does not pick one.
pub const DEFAULT_TONE: &str = "neutral professional";

const ENHANCE_HEADER: &str = "You are an expert product copywriter and translator. \
First, improve the following product description in the base language keeping factual \
accuracy, then translate that improved version into the requested languages.";

const TRANSLATE_HEADER: &str = "You are a precise product translator. Translate the \
original product description from the base language to the requested languages WITHOUT \
enhancing or rewriting it. Preserve meaning and important terms.";

const RESPONSE_CONTRACT: &str = "Return ONLY a valid JSON object (no preamble, no code \
fences) with exactly one key \"translations\": an array whose elements are objects with \
exactly the keys \"lang\" and \"description\". Every \"lang\" value must be one of the \
requested output languages.";

/// Render the instruction string for one request.
///
/// `source_language` is the locale the caller read the description under and
/// is used when the options do not name a base language. The source text is
/// appended last, under a label naming the base language, so description
/// content is never mistaken for instructions.
pub fn build_prompt(source_text: &str, source_language: &str, options: &PromptOptions) -> String {
    let base = options.source_language.as_deref().unwrap_or(source_language);
    let tone = options.tone.as_deref().unwrap_or(DEFAULT_TONE);

    let targets: Vec<&str> = if options.target_languages.is_empty() {
        // Untouched by the resolver: enhance falls back to the base language
        // alone, translate-only has nothing to ask for.
        if options.enhance_source {
            vec![base]
        } else {
            Vec::new()
        }
    } else {
        options.target_languages.iter().map(String::as_str).collect()
    };

    let mut prompt = String::new();
    if options.enhance_source {
        prompt.push_str(ENHANCE_HEADER);
    } else {
        prompt.push_str(TRANSLATE_HEADER);
    }
    prompt.push('\n');
    prompt.push_str(&format!("- Base language: {base}.\n"));
    prompt.push_str(&format!(
        "- Requested output languages (IETF tags): {}.\n",
        targets.join(", ")
    ));
    prompt.push_str(&format!("- Tone: {tone}.\n"));
    if let Some(max_length) = options.max_length {
        prompt.push_str(&format!("- Limit to {max_length} words.\n"));
    }
    prompt.push_str(RESPONSE_CONTRACT);
    prompt.push_str("\n\n");
    prompt.push_str(&format!(
        "Original description (base language {base}):\n{}",
        source_text.trim()
    ));

    prompt
}

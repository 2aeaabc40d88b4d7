pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod locale;
pub mod prompt;
pub mod service;
pub mod types;

pub use catalog::{
    apply_suggestions, enhance_record, translate_record, CatalogRecord, LocaleCatalog,
};
pub use client::{AiClient, AiError, FakeAiClient, HttpAiClient, OpenAiClient};
pub use config::{ConfigError, TranslationsAiConfig};
pub use error::TranslateError;
pub use locale::resolve_targets;
pub use prompt::build_prompt;
pub use service::TranslationsAiService;
pub use types::{ClientOptions, PromptOptions, Translation, TranslationsResponse};

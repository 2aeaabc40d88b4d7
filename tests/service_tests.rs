//! End-to-end tests of the description flow through the public API.

use std::sync::Arc;
use std::time::Duration;

use translations_ai::{
    resolve_targets, AiError, FakeAiClient, PromptOptions, TranslateError, Translation,
    TranslationsAiConfig, TranslationsAiService,
};

fn locales(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

fn enabled_config() -> TranslationsAiConfig {
    TranslationsAiConfig {
        enabled: true,
        timeout_ms: 500,
        ..TranslationsAiConfig::default()
    }
}

fn service_with(
    client: FakeAiClient,
    config: TranslationsAiConfig,
) -> (Arc<FakeAiClient>, TranslationsAiService) {
    let client = Arc::new(client);
    let service = TranslationsAiService::new(client.clone(), config);
    (client, service)
}

#[test]
fn test_resolver_orders_enhance_targets() {
    let supported = locales(&["fr", "de", "en"]);
    assert_eq!(
        resolve_targets("en", &supported, true).unwrap(),
        vec!["en", "de", "fr"]
    );
    assert_eq!(
        resolve_targets("en", &supported, false).unwrap(),
        vec!["de", "fr"]
    );
}

#[test]
fn test_resolver_is_stable_across_calls() {
    let supported = locales(&["ja", "de", "en", "fr", "de"]);
    let first = resolve_targets("en", &supported, true).unwrap();
    let second = resolve_targets("en", &supported, true).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["en", "de", "fr", "ja"]);
}

#[tokio::test]
async fn test_enhance_prompt_reaches_backend_with_resolved_targets() {
    let (client, service) = service_with(
        FakeAiClient::replying(vec![
            Translation::new("en", "A very sturdy bottle."),
            Translation::new("de", "Eine sehr robuste Flasche."),
            Translation::new("fr", "Une bouteille très robuste."),
        ]),
        enabled_config(),
    );

    let suggestions = service
        .enhance_description(
            "A sturdy bottle.",
            "en",
            &locales(&["fr", "de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 3);
    assert_eq!(client.calls(), 1);

    let prompt = client.last_prompt().unwrap();
    assert!(prompt.contains("improve"));
    assert!(prompt.contains("(IETF tags): en, de, fr.\n"));
    assert!(prompt.contains("A sturdy bottle."));
}

#[tokio::test]
async fn test_translate_prompt_excludes_source_and_forbids_rewriting() {
    let (client, service) = service_with(
        FakeAiClient::replying(vec![
            Translation::new("de", "Eine robuste Flasche."),
            Translation::new("fr", "Une bouteille robuste."),
        ]),
        enabled_config(),
    );

    service
        .translate_description(
            "A sturdy bottle.",
            "en",
            &locales(&["fr", "de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap();

    let prompt = client.last_prompt().unwrap();
    assert!(prompt.contains("WITHOUT enhancing or rewriting"));
    assert!(prompt.contains("(IETF tags): de, fr.\n"));
}

#[tokio::test]
async fn test_disabled_feature_fails_fast_with_zero_backend_calls() {
    let (client, service) = service_with(
        FakeAiClient::replying(vec![Translation::new("de", "x")]),
        TranslationsAiConfig::default(),
    );

    let err = service
        .enhance_description(
            "A sturdy bottle.",
            "en",
            &locales(&["de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::FeatureDisabled));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_mock_mode_is_deterministic_and_never_calls_backend() {
    let config = TranslationsAiConfig {
        enabled: true,
        mock_mode: true,
        ..TranslationsAiConfig::default()
    };
    let (client, service) = service_with(
        FakeAiClient::replying(vec![Translation::new("de", "real backend answer")]),
        config,
    );

    let options = PromptOptions {
        target_languages: locales(&["en", "de"]),
        ..PromptOptions::default()
    };
    let first = service
        .enhance_description("A sturdy bottle.", "en", &[], options.clone())
        .await
        .unwrap();
    let second = service
        .enhance_description("A sturdy bottle.", "en", &[], options)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(client.calls(), 0);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].lang, "en");
    assert!(first[0].description.contains("en"));
    assert!(first[1].description.contains("de"));
}

#[tokio::test]
async fn test_empty_backend_reply_surfaces_as_empty_result() {
    let (client, service) = service_with(FakeAiClient::replying(Vec::new()), enabled_config());

    let err = service
        .translate_description(
            "A sturdy bottle.",
            "en",
            &locales(&["de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::EmptyResult));
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_slow_backend_surfaces_timeout_without_partial_results() {
    let config = TranslationsAiConfig {
        enabled: true,
        timeout_ms: 20,
        ..TranslationsAiConfig::default()
    };
    let (client, service) = service_with(
        FakeAiClient::replying(vec![Translation::new("de", "too late")])
            .with_delay(Duration::from_millis(200)),
        config,
    );

    let err = service
        .translate_description(
            "A sturdy bottle.",
            "en",
            &locales(&["de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap_err();

    match err {
        TranslateError::Ai(AiError::Timeout { millis }) => assert_eq!(millis, 20),
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn test_backend_error_text_is_preserved_end_to_end() {
    let (_client, service) = service_with(
        FakeAiClient::failing("insufficient_quota: please check your plan"),
        enabled_config(),
    );

    let err = service
        .enhance_description(
            "A sturdy bottle.",
            "en",
            &locales(&["de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("insufficient_quota"));
}

#[tokio::test]
async fn test_prompt_options_flow_through_to_the_prompt() {
    let (client, service) = service_with(
        FakeAiClient::replying(vec![Translation::new("de", "Eine robuste Flasche.")]),
        enabled_config(),
    );

    let options = PromptOptions {
        tone: Some("playful".to_string()),
        max_length: Some(40),
        ..PromptOptions::default()
    };
    service
        .translate_description(
            "A sturdy bottle.",
            "en",
            &locales(&["de", "en"]),
            options,
        )
        .await
        .unwrap();

    let prompt = client.last_prompt().unwrap();
    assert!(prompt.contains("- Tone: playful.\n"));
    assert!(prompt.contains("- Limit to 40 words.\n"));
}

#[tokio::test]
async fn test_suggestion_order_matches_backend_reply_order() {
    let reply = vec![
        Translation::new("en", "A very sturdy bottle."),
        Translation::new("de", "Eine sehr robuste Flasche."),
        Translation::new("fr", "Une bouteille très robuste."),
    ];
    let (_client, service) = service_with(FakeAiClient::replying(reply.clone()), enabled_config());

    let suggestions = service
        .enhance_description(
            "A sturdy bottle.",
            "en",
            &locales(&["fr", "de", "en"]),
            PromptOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(suggestions, reply);
}

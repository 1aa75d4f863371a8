/*!
 * Tests going from a configuration file to a running context
 */

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use lipi::app_config::{BackendProvider, Config};
use lipi::providers::mock::MockBackend;
use lipi::translation::{TranslationCache, TranslationResolver};
use lipi::{ResolverContext, ResultMode, ScriptDetector, TranslateOptions, TypingPreview};

use crate::common;

#[tokio::test]
async fn test_context_from_saved_config_shouldTranslateOffline() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.cache.capacity = 8;
    config.detection.mother_tongue = Some("hindi".to_string());
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    loaded.validate()?;
    let context = ResolverContext::from_config(&loaded)?;

    assert_eq!(context.resolver().mother_tongue(), Some("hindi"));
    assert_eq!(context.resolver().tier_names(), vec!["dictionary", "conversion"]);
    assert_eq!(context.cache_stats().capacity, 8);

    let result = context.translate("good morning", &TranslateOptions::to("tamil")).await;
    assert_eq!(result.translated_text, "காலை வணக்கம்");
    assert_eq!(result.mode, ResultMode::Translate);
    Ok(())
}

#[test]
fn test_context_from_config_withOllama_shouldAppendBackendTier() -> Result<()> {
    let mut config = Config::default();
    config.backend.provider = BackendProvider::Ollama;
    config.backend.endpoint = "localhost:11434".to_string();
    config.validate()?;

    let context = ResolverContext::from_config(&config)?;
    assert_eq!(context.resolver().tier_names(), vec!["dictionary", "conversion", "backend"]);
    Ok(())
}

#[test]
fn test_context_from_config_withBrokenEndpoint_shouldFail() {
    let mut config = Config::default();
    config.backend.provider = BackendProvider::Ollama;
    config.backend.endpoint = "http://".to_string();

    let error = ResolverContext::from_config(&config).unwrap_err();
    assert!(error.to_string().contains("Failed to create Ollama backend"));
}

#[tokio::test]
async fn test_context_withDisabledCache_shouldCallBackendEveryTime() {
    common::init_logging();
    let backend = MockBackend::working();
    let resolver = TranslationResolver::new(ScriptDetector::new(), TranslationCache::disabled())
        .with_backend(Arc::new(backend.clone()));
    let context = ResolverContext::from_resolver(resolver);
    let options = TranslateOptions::to("german").source("english");

    context.translate("see you at the station", &options).await;
    context.translate("see you at the station", &options).await;

    assert_eq!(backend.call_count(), 2);
    assert_eq!(context.cache_stats().size, 0);
}

#[test]
fn test_context_default_shouldServeBlockingCallers() {
    let context = ResolverContext::default();
    let result = tokio_test::block_on(async {
        context.translate("good night", &TranslateOptions::to("telugu")).await
    });

    assert_eq!(result.translated_text, "శుభ రాత్రి");
    assert!(result.is_translated);
    assert_eq!(context.cache_stats().size, 1);
}

#[tokio::test]
async fn test_preview_from_saved_config_shouldUseConfiguredDebounce() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.preview.debounce_ms = 25;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    loaded.validate()?;
    let context = Arc::new(ResolverContext::from_config(&loaded)?);
    let preview = TypingPreview::from_config(context, TranslateOptions::to("hindi"), &loaded.preview);
    assert_eq!(preview.debounce(), Duration::from_millis(25));

    let mut updates = preview.subscribe();
    preview.on_keystroke("thank you");
    tokio::time::timeout(Duration::from_secs(2), updates.changed()).await??;

    let update = preview.latest().expect("preview was never published");
    assert_eq!(update.input, "thank you");
    assert!(update.result.is_translated);
    Ok(())
}

/*!
 * Caller-facing handle over the whole pipeline.
 *
 * A `ResolverContext` is built once at startup and shared by reference (or
 * `Arc`) with every caller. It owns the only mutable state in the crate: the
 * translation cache and the optional backend connection.
 */

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use super::cache::{CacheStats, TranslationCache};
use super::resolver::TranslationResolver;
use super::{TranslateOptions, TranslationRequest, TranslationResult};
use crate::app_config::{BackendProvider, Config};
use crate::detection::{Detection, ScriptDetector};
use crate::language_utils::registry;
use crate::providers::ollama::Ollama;
use crate::providers::TranslationBackend;

#[derive(Debug)]
pub struct ResolverContext {
    resolver: TranslationResolver,
}

impl Default for ResolverContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverContext {
    /// Offline context: default cache, no backend
    pub fn new() -> Self {
        Self::from_resolver(TranslationResolver::new(ScriptDetector::new(), TranslationCache::default()))
    }

    /// Offline tiers plus the given backend
    pub fn with_backend(backend: Arc<dyn TranslationBackend>) -> Self {
        Self::from_resolver(
            TranslationResolver::new(ScriptDetector::new(), TranslationCache::default()).with_backend(backend),
        )
    }

    /// Wrap a resolver assembled by hand
    pub fn from_resolver(resolver: TranslationResolver) -> Self {
        Self { resolver }
    }

    /// Build the context described by a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = if config.cache.enabled {
            TranslationCache::new(config.cache.capacity, config.cache.ttl())
        } else {
            TranslationCache::disabled()
        };
        let detector = ScriptDetector::with_threshold(config.detection.latin_ratio_threshold);

        let mut resolver =
            TranslationResolver::new(detector, cache).with_mother_tongue(config.detection.mother_tongue.clone());

        match config.backend.provider {
            BackendProvider::None => {
                info!("No translation backend configured, running offline");
            }
            BackendProvider::Ollama => {
                let ollama = Ollama::new(
                    &config.backend.endpoint,
                    config.backend.model.clone(),
                    config.backend.timeout_secs,
                )
                .context("Failed to create Ollama backend")?;
                info!("Using {} backend with model {}", config.backend.provider.display_name(), ollama.model());
                resolver = resolver.with_backend(Arc::new(ollama));
            }
        }

        Ok(Self::from_resolver(resolver))
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    /// Translate or convert a message
    pub async fn translate(&self, text: &str, options: &TranslateOptions) -> TranslationResult {
        self.resolve(&TranslationRequest::new(text, options.clone())).await
    }

    pub async fn resolve(&self, request: &TranslationRequest) -> TranslationResult {
        self.resolver.resolve(request).await
    }

    /// Romanized text into the target language's script; unchanged when unsupported
    pub fn convert_to_native_script(&self, text: &str, target_language: &str) -> String {
        let target = registry().normalize(target_language);
        self.resolver.converter().convert(text, &target)
    }

    pub fn detect_language(&self, text: &str, hint: Option<&str>) -> Detection {
        self.resolver.detector().detect_with_hint(text, hint)
    }

    pub fn is_same_language(&self, a: &str, b: &str) -> bool {
        registry().is_same_language(a, b)
    }

    pub fn clear_cache(&self) {
        self.resolver.cache().clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.resolver.cache().stats()
    }

    pub fn cache(&self) -> &TranslationCache {
        self.resolver.cache()
    }
}

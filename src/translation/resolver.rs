/*!
 * The resolution cascade.
 *
 * States run strictly in order and stop at the first one that produces a
 * changed text:
 *
 * 1. empty input is handed back untouched
 * 2. same source and target: script conversion only, or untouched
 * 3. cache probe
 * 4. tiers: dictionary, script conversion, external backend
 * 5. exhausted: the original text, marked untranslated
 *
 * Tiers sit behind [`ResolutionTier`], so a different backend or an extra
 * strategy can be appended without touching the order above. Nothing in
 * here returns an error; a failing tier is a miss.
 */

use async_trait::async_trait;
use log::{debug, warn};
use std::fmt::Debug;
use std::sync::Arc;

use super::cache::{CacheKey, TranslationCache};
use super::{ResultMode, TranslationMode, TranslationRequest, TranslationResult};
use crate::detection::ScriptDetector;
use crate::dictionary::{self, SpellNormalizer};
use crate::language_utils::{registry, LanguageTag};
use crate::providers::TranslationBackend;
use crate::transliteration::TransliterationEngine;

/// Normalized request as seen by a tier
#[derive(Debug)]
pub struct TierInput<'a> {
    /// Trimmed, non-empty text
    pub text: &'a str,
    pub source: &'a LanguageTag,
    pub target: &'a LanguageTag,
    pub mode: TranslationMode,
    /// Whether script conversion applies to this request
    pub convert_mode: bool,
}

/// Text produced by a tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub mode: ResultMode,
}

/// One strategy of the cascade
#[async_trait]
pub trait ResolutionTier: Send + Sync + Debug {
    /// Short identifier used in log lines
    fn name(&self) -> &'static str;

    /// Produce a changed text, or `None` to fall through to the next tier
    async fn resolve(&self, input: &TierInput<'_>) -> Option<Resolution>;
}

/// Romanized text to native script, with curated spellings first
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptConverter {
    engine: TransliterationEngine,
    speller: SpellNormalizer,
}

impl ScriptConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the language has a transliteration profile
    pub fn supports(&self, tag: &LanguageTag) -> bool {
        self.engine.supports(tag)
    }

    /// Convert text into the language's script.
    ///
    /// Each word is spell-normalized for the language, then looked up in
    /// the romanized lexicon, then run through the syllable engine.
    /// Languages without a profile get the text back unchanged.
    pub fn convert(&self, text: &str, tag: &LanguageTag) -> String {
        let Some(profile) = self.engine.profile_for(tag) else {
            return text.to_string();
        };
        let language = tag.canonical_name();

        self.engine.transliterate_with(text, profile, |word| {
            let fixed = self.speller.normalize_word(word, Some(language));
            dictionary::romanized_lexicon(language, &fixed)
                .map(str::to_string)
                .or_else(|| (fixed != word).then(|| self.engine.transliterate_word(&fixed, profile)))
        })
    }
}

/// Phrase and word dictionaries, tried on the raw and the spell-normalized text
#[derive(Debug, Default)]
pub struct DictionaryTier {
    speller: SpellNormalizer,
}

impl DictionaryTier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResolutionTier for DictionaryTier {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    async fn resolve(&self, input: &TierInput<'_>) -> Option<Resolution> {
        let source = input.source.canonical_name();
        let target = input.target.canonical_name();

        let text = dictionary::convert_with_dictionary(input.text, source, target).or_else(|| {
            let normalized = self.speller.normalize(input.text, Some(source));
            if normalized == input.text {
                return None;
            }
            dictionary::convert_with_dictionary(&normalized, source, target)
        })?;

        Some(Resolution { text, mode: ResultMode::Translate })
    }
}

/// Script conversion for Latin text aimed at a native-script language
#[derive(Debug, Default)]
pub struct ConversionTier {
    converter: ScriptConverter,
}

impl ConversionTier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResolutionTier for ConversionTier {
    fn name(&self) -> &'static str {
        "conversion"
    }

    async fn resolve(&self, input: &TierInput<'_>) -> Option<Resolution> {
        if !input.convert_mode {
            return None;
        }

        let converted = self.converter.convert(input.text, input.target);
        (converted != input.text).then_some(Resolution { text: converted, mode: ResultMode::Convert })
    }
}

/// External semantic-translation backend, called once
#[derive(Debug)]
pub struct BackendTier {
    backend: Arc<dyn TranslationBackend>,
    detector: ScriptDetector,
    converter: ScriptConverter,
}

impl BackendTier {
    pub fn new(backend: Arc<dyn TranslationBackend>, detector: ScriptDetector) -> Self {
        Self { backend, detector, converter: ScriptConverter::new() }
    }
}

#[async_trait]
impl ResolutionTier for BackendTier {
    fn name(&self) -> &'static str {
        "backend"
    }

    async fn resolve(&self, input: &TierInput<'_>) -> Option<Resolution> {
        let source_code = input.source.primary_code();
        let target_code = input.target.primary_code();

        let translated = match self.backend.translate_remote(input.text, &source_code, &target_code).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Backend {} failed ({} -> {}): {}", self.backend.name(), source_code, target_code, e);
                return None;
            }
        };

        let translated = translated.trim();
        if translated.is_empty() || translated == input.text {
            debug!("Backend {} returned no change for ({} -> {})", self.backend.name(), source_code, target_code);
            return None;
        }

        // Some backends answer in romanized form
        let text = if input.target.is_native_script() && self.detector.is_latin_text(translated) {
            self.converter.convert(translated, input.target)
        } else {
            translated.to_string()
        };

        Some(Resolution { text, mode: ResultMode::Translate })
    }
}

/// Orchestrates the cascade over a shared cache
#[derive(Debug)]
pub struct TranslationResolver {
    detector: ScriptDetector,
    converter: ScriptConverter,
    cache: TranslationCache,
    tiers: Vec<Box<dyn ResolutionTier>>,
    mother_tongue: Option<String>,
}

impl TranslationResolver {
    /// Resolver with the offline tiers (dictionary, conversion)
    pub fn new(detector: ScriptDetector, cache: TranslationCache) -> Self {
        Self {
            detector,
            converter: ScriptConverter::new(),
            cache,
            tiers: vec![Box::new(DictionaryTier::new()), Box::new(ConversionTier::new())],
            mother_tongue: None,
        }
    }

    /// Append the external backend as the last tier
    pub fn with_backend(self, backend: Arc<dyn TranslationBackend>) -> Self {
        let tier = BackendTier::new(backend, self.detector.clone());
        self.with_tier(Box::new(tier))
    }

    /// Append a custom tier after the existing ones
    pub fn with_tier(mut self, tier: Box<dyn ResolutionTier>) -> Self {
        self.tiers.push(tier);
        self
    }

    /// Language used as the detection hint when the source is not given
    pub fn with_mother_tongue(mut self, language: Option<String>) -> Self {
        self.mother_tongue = language.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    pub fn detector(&self) -> &ScriptDetector {
        &self.detector
    }

    pub fn converter(&self) -> &ScriptConverter {
        &self.converter
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn mother_tongue(&self) -> Option<&str> {
        self.mother_tongue.as_deref()
    }

    /// Resolve a request. Never fails; the worst case is the original text.
    pub async fn resolve(&self, request: &TranslationRequest) -> TranslationResult {
        let text = request.text.trim();
        let target = registry().normalize(&request.target_language);

        if text.is_empty() {
            let source = request
                .explicit_source()
                .map_or_else(|| "auto".to_string(), |s| registry().normalize(s).canonical_name().to_string());
            return TranslationResult::unchanged(
                &request.text,
                &source,
                target.canonical_name(),
                exhausted_mode(request.mode == TranslationMode::Convert),
            );
        }

        let source = self.source_for(request, text);

        if source.canonical_name() == target.canonical_name() {
            return self.resolve_same_language(request, text, &source, &target);
        }

        let key = CacheKey::new(text, source.canonical_name(), target.canonical_name());
        if let Some(mut cached) = self.cache.get(&key) {
            if cached_mode_fits(request.mode, cached.mode) {
                cached.original_text = request.text.clone();
                cached.is_translated = true;
                return cached;
            }
            debug!("Cached {:?} result does not answer a {:?} request", cached.mode, request.mode);
        }

        let convert_mode = match request.mode {
            TranslationMode::Convert => true,
            TranslationMode::Translate => false,
            TranslationMode::Auto => self.detector.is_latin_text(text) && target.is_native_script(),
        };

        let input = TierInput { text, source: &source, target: &target, mode: request.mode, convert_mode };

        for tier in &self.tiers {
            if let Some(resolution) = tier.resolve(&input).await {
                debug!("{} tier resolved text ({} -> {})", tier.name(), source.canonical_name(), target.canonical_name());
                let result = TranslationResult {
                    translated_text: resolution.text,
                    original_text: request.text.clone(),
                    source_language: source.canonical_name().to_string(),
                    target_language: target.canonical_name().to_string(),
                    is_translated: true,
                    mode: resolution.mode,
                };
                self.cache.store(key, result.clone());
                return result;
            }
        }

        debug!("No tier changed the text ({} -> {})", source.canonical_name(), target.canonical_name());
        TranslationResult::unchanged(
            &request.text,
            source.canonical_name(),
            target.canonical_name(),
            exhausted_mode(convert_mode),
        )
    }

    /// Explicit source, or the detected one biased toward the mother tongue
    fn source_for(&self, request: &TranslationRequest, text: &str) -> LanguageTag {
        match request.explicit_source() {
            Some(source) => registry().normalize(source),
            None => {
                let detection = self.detector.detect_with_hint(text, self.mother_tongue.as_deref());
                debug!("Detected source {} ({:?}, {:.2})", detection.language, detection.method, detection.confidence);
                registry().normalize(&detection.language)
            }
        }
    }

    /// A user typing phonetically in their own language still gets native script
    fn resolve_same_language(
        &self,
        request: &TranslationRequest,
        text: &str,
        source: &LanguageTag,
        target: &LanguageTag,
    ) -> TranslationResult {
        let wants_script = request.mode != TranslationMode::Translate
            && target.is_native_script()
            && self.detector.is_latin_text(text);

        if wants_script {
            let converted = self.converter.convert(text, target);
            if converted != text {
                return TranslationResult {
                    translated_text: converted,
                    original_text: request.text.clone(),
                    source_language: source.canonical_name().to_string(),
                    target_language: target.canonical_name().to_string(),
                    is_translated: true,
                    mode: ResultMode::Convert,
                };
            }
        }

        TranslationResult::unchanged(
            &request.text,
            source.canonical_name(),
            target.canonical_name(),
            ResultMode::SameLanguage,
        )
    }
}

/// An explicit mode only accepts cached results of the same kind
fn cached_mode_fits(requested: TranslationMode, cached: ResultMode) -> bool {
    match requested {
        TranslationMode::Auto => true,
        TranslationMode::Translate => cached != ResultMode::Convert,
        TranslationMode::Convert => cached == ResultMode::Convert,
    }
}

fn exhausted_mode(convert_mode: bool) -> ResultMode {
    if convert_mode {
        ResultMode::Convert
    } else {
        ResultMode::Translate
    }
}

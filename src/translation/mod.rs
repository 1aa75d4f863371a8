/*!
 * Translation resolution for chat messages.
 *
 * - `resolver`: the tiered cascade (dictionary, script conversion, backend)
 * - `cache`: bounded memo of resolved results
 * - `context`: caller-facing handle owning every piece of mutable state
 * - `preview`: debounced, cancellable resolution while the user types
 */

use serde::{Deserialize, Serialize};

pub mod cache;
pub mod context;
pub mod preview;
pub mod resolver;

pub use self::cache::{CacheKey, CacheStats, TranslationCache};
pub use self::context::ResolverContext;
pub use self::preview::{PreviewUpdate, TypingPreview};
pub use self::resolver::{
    BackendTier, ConversionTier, DictionaryTier, Resolution, ResolutionTier, ScriptConverter, TierInput,
    TranslationResolver,
};

/// What the caller wants done with the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMode {
    /// Convert script when Latin text targets a native-script language, else translate
    #[default]
    Auto,
    /// Change the meaning's language
    Translate,
    /// Change only the script
    Convert,
}

/// How a result was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultMode {
    Translate,
    Convert,
    SameLanguage,
}

/// Language options for a translation call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslateOptions {
    /// Source language; `None` or "auto" detects it
    pub source_language: Option<String>,
    pub target_language: String,
    #[serde(default)]
    pub mode: TranslationMode,
}

impl TranslateOptions {
    /// Options targeting `target_language` with a detected source
    pub fn to(target_language: impl Into<String>) -> Self {
        Self {
            source_language: None,
            target_language: target_language.into(),
            mode: TranslationMode::Auto,
        }
    }

    pub fn source(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = Some(source_language.into());
        self
    }

    pub fn mode(mut self, mode: TranslationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// One resolution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: Option<String>,
    pub target_language: String,
    #[serde(default)]
    pub mode: TranslationMode,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, options: TranslateOptions) -> Self {
        Self {
            text: text.into(),
            source_language: options.source_language,
            target_language: options.target_language,
            mode: options.mode,
        }
    }

    /// Source language to use, or `None` when it must be detected
    pub fn explicit_source(&self) -> Option<&str> {
        self.source_language
            .as_deref()
            .map(str::trim)
            .filter(|source| !source.is_empty() && !source.eq_ignore_ascii_case("auto"))
    }
}

/// Outcome of a resolution; also the cached value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub original_text: String,
    pub source_language: String,
    pub target_language: String,
    pub is_translated: bool,
    pub mode: ResultMode,
}

impl TranslationResult {
    /// Result that hands the caller's text back untouched
    pub fn unchanged(text: &str, source_language: &str, target_language: &str, mode: ResultMode) -> Self {
        Self {
            translated_text: text.to_string(),
            original_text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            is_translated: false,
            mode,
        }
    }
}

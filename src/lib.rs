/*!
 * # lipi - multilingual chat text pipeline
 *
 * Turns what a user types into what their chat partner reads: detects the
 * language of a message, converts romanized (phonetic) input into the
 * native script of Indic languages, and translates between languages
 * through a cascade of offline dictionaries and an optional LLM backend.
 *
 * ## Features
 *
 * - Unicode-block, phonetic and diacritic language detection
 * - Syllable-based transliteration for Devanagari, Bengali, Gurmukhi,
 *   Gujarati, Odia, Tamil, Telugu, Kannada and Malayalam
 * - Chat-speak and romanization spelling normalization
 * - Phrase and word dictionaries with an English pivot
 * - Bounded, thread-safe translation cache
 * - Debounced typing preview where the last keystroke wins
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language_utils`: Language registry and ISO code utilities
 * - `detection`: Script and language detection
 * - `transliteration`: Script profiles and the syllable engine
 * - `dictionary`: Phrase/word tables and the spell normalizer
 * - `translation`: Resolution cascade, cache, caller context and preview
 * - `providers`: External translation backends:
 *   - `providers::ollama`: Ollama API client
 *   - `providers::mock`: Scripted backend for tests
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod detection;
pub mod dictionary;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;
pub mod transliteration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use detection::{Detection, DetectionMethod, ScriptDetector};
pub use errors::{AppError, ProviderError};
pub use language_utils::{is_same_language, normalize_language, registry, LanguageTag, Script};
pub use translation::{
    CacheStats, ResolverContext, ResultMode, TranslateOptions, TranslationMode, TranslationRequest,
    TranslationResult, TypingPreview,
};
pub use transliteration::TransliterationEngine;

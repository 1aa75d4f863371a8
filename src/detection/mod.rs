/*!
 * Script and language detection.
 *
 * Detection is a pure function of the text and an optional hint language.
 * Tiers, highest confidence first:
 *
 * - `unicode`: any native-script code point decides the language outright
 * - hint: the user's declared language, checked against its own phonetic list
 * - `phonetic`: romanized function words and patterns of non-Latin languages
 * - `latin`: diacritics and function words of Latin-alphabet languages
 * - default: English
 */

use log::debug;
use serde::Serialize;

use crate::language_utils::{registry, Script};

pub mod latin;
pub mod phonetic;
pub mod unicode;

pub use self::unicode::script_of;

/// Confidence of a native-script block hit
pub const BLOCK_CONFIDENCE: f32 = 0.95;

/// Confidence of the English fallback
pub const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Default share of Latin letters above which a text counts as Latin-dominant
pub const DEFAULT_LATIN_RATIO_THRESHOLD: f32 = 0.75;

/// Which tier produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    UnicodeBlock,
    Hint,
    Phonetic,
    Diacritic,
    FunctionWords,
    Default,
}

/// Result of language detection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    /// Canonical language name
    pub language: String,
    /// Script the text is written in
    pub script: Script,
    /// Whether the text is written in Latin letters
    pub is_latin: bool,
    /// Confidence in [0, 1]
    pub confidence: f32,
    /// Tier that produced the result
    pub method: DetectionMethod,
}

impl Detection {
    fn latin(language: &str, confidence: f32, method: DetectionMethod) -> Self {
        Self {
            language: language.to_string(),
            script: Script::Latin,
            is_latin: true,
            confidence,
            method,
        }
    }
}

/// Stateless language detector
#[derive(Debug, Clone)]
pub struct ScriptDetector {
    latin_ratio_threshold: f32,
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptDetector {
    pub fn new() -> Self {
        Self { latin_ratio_threshold: DEFAULT_LATIN_RATIO_THRESHOLD }
    }

    /// Detector with a custom Latin-dominance threshold
    pub fn with_threshold(latin_ratio_threshold: f32) -> Self {
        Self { latin_ratio_threshold }
    }

    /// Detect the language of a text
    pub fn detect(&self, text: &str) -> Detection {
        self.detect_with_hint(text, None)
    }

    /// Whether the text is written predominantly in Latin letters
    pub fn is_latin_text(&self, text: &str) -> bool {
        unicode::latin_ratio(text).is_some_and(|ratio| ratio > self.latin_ratio_threshold)
    }

    /// Detect the language of a text, biased toward a hint language
    pub fn detect_with_hint(&self, text: &str, hint: Option<&str>) -> Detection {
        let hint_tag = hint
            .filter(|h| !h.trim().is_empty())
            .map(|h| registry().normalize(h));

        if let Some(script) = unicode::dominant_native_script(text) {
            let language = match &hint_tag {
                Some(tag) if tag.writing_system() == script => tag.canonical_name().to_string(),
                _ => unicode::language_for_script(script, text).to_string(),
            };
            debug!("Detected {} from {:?} code points", language, script);
            return Detection {
                language,
                script,
                is_latin: false,
                confidence: BLOCK_CONFIDENCE,
                method: DetectionMethod::UnicodeBlock,
            };
        }

        if !self.is_latin_text(text) {
            return Detection::latin("english", DEFAULT_CONFIDENCE, DetectionMethod::Default);
        }

        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);

        if let Some(tag) = &hint_tag {
            if let Some(profile) = phonetic::profile_for(tag.canonical_name()) {
                if let Some(found) = phonetic::score_profile(profile, &tokens, &lowered, 1) {
                    debug!("Hint language {} confirmed with {} matches", found.language, found.match_count);
                    return Detection::latin(found.language, found.confidence, DetectionMethod::Hint);
                }
            }
        }

        if let Some(found) = phonetic::best_match(&tokens, &lowered) {
            debug!("Detected romanized {} with {} matches", found.language, found.match_count);
            return Detection::latin(found.language, found.confidence, DetectionMethod::Phonetic);
        }

        if let Some(language) = latin::diacritic_language(text) {
            return Detection::latin(language, latin::STRONG_LATIN_CONFIDENCE, DetectionMethod::Diacritic);
        }

        if let Some((language, hits)) = latin::function_word_language(&tokens) {
            let confidence = if hits >= 2 {
                latin::STRONG_LATIN_CONFIDENCE
            } else {
                latin::WEAK_LATIN_CONFIDENCE
            };
            return Detection::latin(language, confidence, DetectionMethod::FunctionWords);
        }

        Detection::latin("english", DEFAULT_CONFIDENCE, DetectionMethod::Default)
    }
}

/// Lowercase word tokens with surrounding punctuation removed
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/*!
 * Tests for script and language detection
 */

use lipi::detection::{DetectionMethod, ScriptDetector};
use lipi::language_utils::Script;

#[test]
fn test_detect_withGermanQuestion_shouldUseLatinHeuristic() {
    let detection = ScriptDetector::new().detect("Wie geht es dir?");
    assert_eq!(detection.language, "german");
    assert!(detection.is_latin);
    assert!((detection.confidence - 0.85).abs() < 1e-6);
    assert_eq!(detection.method, DetectionMethod::FunctionWords);
}

#[test]
fn test_detect_withDevanagariAndAscii_shouldReturnHighConfidence() {
    let detection = ScriptDetector::new().detect("नमस्ते!!! :) 123");
    assert_eq!(detection.language, "hindi");
    assert_eq!(detection.script, Script::Devanagari);
    assert!(detection.confidence >= 0.9);
    assert_eq!(detection.method, DetectionMethod::UnicodeBlock);
}

#[test]
fn test_detect_withNativeScripts_shouldMapBlockToLanguage() {
    let detector = ScriptDetector::new();
    assert_eq!(detector.detect("ఎలా ఉన్నావు").language, "telugu");
    assert_eq!(detector.detect("வணக்கம்").language, "tamil");
    assert_eq!(detector.detect("Привет").language, "russian");
    assert_eq!(detector.detect("안녕하세요").language, "korean");
}

#[test]
fn test_detect_withRomanizedTelugu_shouldUsePhoneticTier() {
    let detection = ScriptDetector::new().detect("emi chesthunnavu");
    assert_eq!(detection.language, "telugu");
    assert!(detection.is_latin);
    assert_eq!(detection.method, DetectionMethod::Phonetic);
    assert!(detection.confidence >= 0.7 && detection.confidence <= 0.9);
}

#[test]
fn test_detect_withRomanizedHindi_shouldUsePhoneticTier() {
    let detection = ScriptDetector::new().detect("kya kar raha hai yaar");
    assert_eq!(detection.language, "hindi");
    assert_eq!(detection.method, DetectionMethod::Phonetic);
}

#[test]
fn test_detect_withSpanishDiacritics_shouldReturnSpanish() {
    let detection = ScriptDetector::new().detect("¿Qué haces mañana?");
    assert_eq!(detection.language, "spanish");
    assert_eq!(detection.method, DetectionMethod::Diacritic);
    assert!((detection.confidence - 0.85).abs() < 1e-6);
}

#[test]
fn test_detect_withEmptyText_shouldDefaultToEnglish() {
    let detection = ScriptDetector::new().detect("");
    assert_eq!(detection.language, "english");
    assert_eq!(detection.method, DetectionMethod::Default);
}

#[test]
fn test_is_latin_text_shouldHonourThreshold() {
    let detector = ScriptDetector::new();
    assert!(detector.is_latin_text("hello there"));
    assert!(!detector.is_latin_text("नमस्ते"));
    assert!(!detector.is_latin_text("12345"));
}

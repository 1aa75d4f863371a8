/*!
 * Tests for the syllable engine and script profiles
 */

use lipi::language_utils::registry;
use lipi::transliteration::profile::{profile_by_name, supported_languages};
use lipi::transliteration::TransliterationEngine;

fn transliterate(text: &str, language: &str) -> String {
    TransliterationEngine::new().transliterate_for(text, &registry().normalize(language))
}

#[test]
fn test_transliterate_withNamaste_shouldRenderDevanagari() {
    assert_eq!(transliterate("namaste", "hindi"), "नमस्ते");
}

#[test]
fn test_transliterate_withTeluguSentence_shouldLeaveNoLatinLetters() {
    let out = transliterate("emi chesthunnavu", "telugu");
    assert!(!out.is_empty());
    assert!(!out.chars().any(|c| c.is_ascii_alphabetic()), "got {}", out);
    assert!(out.chars().any(|c| ('\u{0C00}'..='\u{0C7F}').contains(&c)));
}

#[test]
fn test_transliterate_withUnmappedLetters_shouldKeepLiteral() {
    let out = transliterate("xyzzy", "tamil");
    assert!(!out.is_empty());
    assert!(out.contains('z'), "got {}", out);
}

#[test]
fn test_transliterate_withArbitraryInput_shouldBeTotal() {
    let inputs = ["", " ", "!!!", "a", "qqqq", "hello world", "ñandú", "123abc", "mixed नमस्ते text", "\t\n"];
    for language in supported_languages() {
        for input in inputs {
            let out = transliterate(input, language);
            assert_eq!(out.is_empty(), input.is_empty(), "{} / {:?}", language, input);
        }
    }
}

#[test]
fn test_transliterate_withNativeInput_shouldBeIdentity() {
    let samples = [
        ("hindi", "नमस्ते दोस्त"),
        ("telugu", "ఎలా ఉన్నావు?"),
        ("tamil", "வணக்கம்"),
        ("bengali", "আমি ভালো আছি"),
        ("malayalam", "നന്ദി"),
    ];
    for (language, text) in samples {
        assert_eq!(transliterate(text, language), text);
    }
}

#[test]
fn test_transliterate_withUnsupportedLanguage_shouldReturnInput() {
    assert_eq!(transliterate("bonjour", "french"), "bonjour");
    assert_eq!(transliterate("ni hao", "chinese"), "ni hao");
}

#[test]
fn test_transliterate_withWordFinalAm_shouldUseAnusvaraOnlyForDravidian() {
    assert_eq!(transliterate("nijam", "telugu"), "నిజం");
    assert_eq!(transliterate("nijam", "kannada"), "ನಿಜಂ");
    assert!(!transliterate("nijam", "hindi").contains('\u{0902}'));
}

#[test]
fn test_transliterate_withBareFinalConsonant_shouldAppendVirama() {
    assert_eq!(transliterate("kamal", "hindi"), "कमल्");
}

#[test]
fn test_profiles_shouldRecordDerivation() {
    assert_eq!(profile_by_name("marathi").unwrap().derives_from(), Some("hindi"));
    assert_eq!(profile_by_name("nepali").unwrap().derives_from(), Some("hindi"));
    assert_eq!(profile_by_name("assamese").unwrap().derives_from(), Some("bengali"));
    assert_eq!(profile_by_name("hindi").unwrap().derives_from(), None);
}

#[test]
fn test_supported_languages_shouldListIndicProfiles() {
    let supported: Vec<&str> = supported_languages().collect();
    for expected in ["hindi", "marathi", "bengali", "punjabi", "gujarati", "odia", "tamil", "telugu", "kannada", "malayalam"] {
        assert!(supported.contains(&expected), "missing {}", expected);
    }
    assert!(!supported.contains(&"english"));
}

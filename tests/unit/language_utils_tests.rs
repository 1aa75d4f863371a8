/*!
 * Tests for the language registry
 */

use lipi::language_utils::{is_same_language, normalize_language, registry, Script, ScriptKind};

#[test]
fn test_normalize_withCodesAndNames_shouldAgree() {
    for input in ["te", "tel", "Telugu", "  TELUGU  "] {
        assert_eq!(normalize_language(input).canonical_name(), "telugu", "input {:?}", input);
    }
}

#[test]
fn test_normalize_withAliases_shouldResolve() {
    assert_eq!(normalize_language("farsi").canonical_name(), "persian");
    assert_eq!(normalize_language("oriya").canonical_name(), "odia");
    assert_eq!(normalize_language("panjabi").canonical_name(), "punjabi");
    assert_eq!(normalize_language("mandarin").canonical_name(), "chinese");
    assert_eq!(normalize_language("tagalog").canonical_name(), "filipino");
}

#[test]
fn test_normalize_withUnknownInput_shouldDegradeToLatin() {
    let tag = normalize_language("Klingon");
    assert_eq!(tag.canonical_name(), "klingon");
    assert!(!tag.is_known());
    assert_eq!(tag.script(), ScriptKind::Latin);
    assert!(!tag.is_native_script());
}

#[test]
fn test_is_same_language_withAliasAndName_shouldBeTrue() {
    assert!(is_same_language("bangla", "bengali"));
    assert!(is_same_language("bn", "Bengali"));
    assert!(is_same_language("en-US", "english"));
    assert!(!is_same_language("hindi", "urdu"));
}

#[test]
fn test_writing_system_shouldMatchScriptKind() {
    let hindi = registry().get("hindi").unwrap();
    assert_eq!(hindi.writing_system(), Script::Devanagari);
    assert!(hindi.is_native_script());

    let spanish = registry().get("spanish").unwrap();
    assert_eq!(spanish.writing_system(), Script::Latin);
    assert!(!spanish.is_native_script());
}

#[test]
fn test_lookup_withAuto_shouldNotResolve() {
    assert!(registry().lookup("").is_none());
    assert!(registry().lookup("   ").is_none());
}

#[test]
fn test_languages_shouldCoverIndicLanguages() {
    let names: Vec<&str> = registry().languages().map(|tag| tag.canonical_name()).collect();
    for expected in ["hindi", "telugu", "tamil", "kannada", "malayalam", "bengali", "gujarati", "punjabi"] {
        assert!(names.contains(&expected), "missing {}", expected);
    }
    assert!(names.len() >= 50);
}

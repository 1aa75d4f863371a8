/*!
 * Tests for the phrase/word dictionaries and the spell normalizer
 */

use lipi::dictionary::{convert_with_dictionary, phrases, romanized_lexicon, words, SpellNormalizer};

#[test]
fn test_lookup_phrase_withEnglishKey_shouldRenderTarget() {
    assert_eq!(phrases().lookup_phrase("thank you", "hindi").as_deref(), Some("धन्यवाद"));
    assert_eq!(phrases().lookup_phrase("Good night", "spanish").as_deref(), Some("Buenas noches"));
    assert_eq!(phrases().lookup_phrase("good night!!", "french").as_deref(), Some("bonne nuit!!"));
}

#[test]
fn test_lookup_phrase_withUnknownText_shouldReturnNone() {
    assert_eq!(phrases().lookup_phrase("the mitochondria", "hindi"), None);
    assert_eq!(phrases().lookup_phrase("   ", "hindi"), None);
    assert_eq!(phrases().lookup_phrase("?!", "hindi"), None);
}

#[test]
fn test_translate_phrase_toEnglish_shouldReturnKey() {
    assert_eq!(phrases().translate_phrase("धन्यवाद", "hindi", "english").as_deref(), Some("thank you"));
    assert_eq!(phrases().translate_phrase("Merci", "french", "english").as_deref(), Some("Thank you"));
}

#[test]
fn test_lookup_word_withPunctuation_shouldKeepCase() {
    assert_eq!(words().lookup_word("water", "spanish").as_deref(), Some("agua"));
    assert_eq!(words().lookup_word("Water!", "french").as_deref(), Some("Eau"));
}

#[test]
fn test_convert_with_dictionary_withMixedHits_shouldKeepUnknownTokens() {
    let out = convert_with_dictionary("water please", "english", "spanish").unwrap();
    assert!(out.starts_with("agua "), "got {}", out);
    assert_eq!(convert_with_dictionary("xylophone quartet", "english", "spanish"), None);
}

#[test]
fn test_convert_with_dictionary_withWhitespace_shouldPreserveGaps() {
    let out = convert_with_dictionary("  water   quartet ", "english", "spanish").unwrap();
    assert_eq!(out, "  agua   quartet ");
}

#[test]
fn test_romanized_lexicon_withUnknownLanguage_shouldMiss() {
    assert_eq!(romanized_lexicon("telugu", "nenu"), Some("నేను"));
    assert_eq!(romanized_lexicon("klingon", "nenu"), None);
}

#[test]
fn test_spell_normalizer_withChatSpeak_shouldExpand() {
    let speller = SpellNormalizer::new();
    assert_eq!(speller.normalize("gm, how r u?", None), "good morning, how are you?");
    assert_eq!(speller.normalize("Plz call me", Some("english")), "Please call me");
}

#[test]
fn test_spell_normalizer_withLanguageVariants_shouldFoldSpelling() {
    let speller = SpellNormalizer::new();
    assert_eq!(speller.normalize("main nhi aaunga", Some("hindi")), "main nahi aaunga");
    assert_eq!(speller.normalize("nuvu ekkada", Some("telugu")), "nuvvu ekkada");
    // chat-speak is English only
    assert_eq!(speller.normalize("u", Some("hindi")), "u");
}

#[test]
fn test_spell_normalizer_withRepeatedLetters_shouldCollapse() {
    let speller = SpellNormalizer::new();
    assert_eq!(speller.normalize("heyyyy sooo good!!!", None), "hey so good!!!");
    assert_eq!(speller.normalize("Hellooooo", None), "Hello");
}

#[test]
fn test_spell_normalizer_withNativeScript_shouldLeaveUntouched() {
    let speller = SpellNormalizer::new();
    assert_eq!(speller.normalize("नमस्ते u", None), "नमस्ते you");
}

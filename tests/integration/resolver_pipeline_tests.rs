/*!
 * End-to-end tests for the resolution cascade
 */

use std::sync::Arc;

use lipi::detection::ScriptDetector;
use lipi::providers::mock::MockBackend;
use lipi::translation::{TranslationCache, TranslationResolver};
use lipi::{ResolverContext, ResultMode, TranslateOptions, TranslationMode};

use crate::common::{self, RecordedCall, RecordingBackend};

#[tokio::test]
async fn test_translate_withRomanizedHindi_shouldConvertScript() {
    let context = common::offline_context();
    let result = context.translate("namaste", &TranslateOptions::to("hindi")).await;

    assert_eq!(result.translated_text, "नमस्ते");
    assert!(result.is_translated);
    assert_eq!(result.mode, ResultMode::Convert);
}

#[tokio::test]
async fn test_translate_withRomanizedTeluguToTelugu_shouldConvertAsSameLanguage() {
    let context = common::offline_context();
    let result = context.translate("emi chesthunnavu", &TranslateOptions::to("telugu")).await;

    assert_eq!(result.source_language, "telugu");
    assert_eq!(result.mode, ResultMode::Convert);
    assert!(result.is_translated);
    assert!(!result.translated_text.chars().any(|c| c.is_ascii_alphabetic()));
    // same-language conversions skip the cache
    assert_eq!(context.cache_stats().size, 0);
}

#[tokio::test]
async fn test_translate_withSameLanguage_shouldReturnInputUnchanged() {
    let context = common::offline_context();
    let options = TranslateOptions::to("english").source("english");
    let result = context.translate("Hello", &options).await;

    assert_eq!(result.translated_text, "Hello");
    assert!(!result.is_translated);
    assert_eq!(result.mode, ResultMode::SameLanguage);
}

#[tokio::test]
async fn test_translate_withAliasedSameLanguage_shouldBypassTranslation() {
    let (context, backend) = common::context_with_mock(MockBackend::working());
    let options = TranslateOptions::to("bengali").source("bangla").mode(TranslationMode::Translate);
    let result = context.translate("ami bhalo achi", &options).await;

    assert_eq!(result.translated_text, "ami bhalo achi");
    assert_eq!(result.mode, ResultMode::SameLanguage);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_translate_withShortEnglishHomograph_shouldNotTreatAsTargetLanguage() {
    let backend = RecordingBackend::new("আমার মাথা ব্যথা");
    let context = ResolverContext::with_backend(Arc::new(backend.clone()));
    let options = TranslateOptions::to("bengali").mode(TranslationMode::Translate);
    let result = context.translate("my head ache", &options).await;

    assert_eq!(result.source_language, "english");
    assert_eq!(result.mode, ResultMode::Translate);
    assert_eq!(result.translated_text, "আমার মাথা ব্যথা");
    assert_eq!(
        backend.calls(),
        vec![RecordedCall {
            text: "my head ache".to_string(),
            source_code: "en".to_string(),
            target_code: "bn".to_string(),
        }]
    );

    let result = context.translate("tame the dog", &TranslateOptions::to("gujarati")).await;
    assert_eq!(result.source_language, "english");
    assert_ne!(result.mode, ResultMode::SameLanguage);
}

#[tokio::test]
async fn test_translate_withNativeInputForSameLanguage_shouldBeIdentity() {
    let context = common::offline_context();
    let result = context.translate("नमस्ते दोस्त", &TranslateOptions::to("hi")).await;

    assert_eq!(result.translated_text, "नमस्ते दोस्त");
    assert_eq!(result.source_language, "hindi");
    assert_eq!(result.mode, ResultMode::SameLanguage);
}

#[tokio::test]
async fn test_translate_withThankYou_shouldHitPhraseDictionary() {
    let context = common::offline_context();
    let result = context.translate("thank you", &TranslateOptions::to("hindi")).await;

    assert_eq!(result.translated_text, "धन्यवाद");
    assert_eq!(result.source_language, "english");
    assert_eq!(result.target_language, "hindi");
    assert_eq!(result.mode, ResultMode::Translate);
    assert!(result.is_translated);
}

#[tokio::test]
async fn test_translate_withDictionaryAndBackend_shouldPreferDictionary() {
    let (context, backend) = common::context_with_mock(MockBackend::working());
    let result = context.translate("How are you?", &TranslateOptions::to("hindi")).await;

    assert_eq!(result.translated_text, "आप कैसे हैं?");
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_translate_withChatSpeak_shouldNormalizeBeforeDictionary() {
    let context = common::offline_context();
    let options = TranslateOptions::to("spanish").source("english");
    let result = context.translate("thx", &options).await;

    assert_eq!(result.translated_text, "gracias");
    assert_eq!(result.mode, ResultMode::Translate);
}

#[tokio::test]
async fn test_translate_withNativeSource_shouldReverseLookup() {
    let context = common::offline_context();
    let result = context.translate("धन्यवाद", &TranslateOptions::to("english")).await;

    assert_eq!(result.source_language, "hindi");
    assert_eq!(result.translated_text, "thank you");
}

#[tokio::test]
async fn test_translate_twice_shouldReturnIdenticalResultWithoutSecondBackendCall() {
    let (context, backend) = common::context_with_mock(MockBackend::working());
    let options = TranslateOptions::to("german").source("english");

    let first = context.translate("see you at the station", &options).await;
    let second = context.translate("see you at the station", &options).await;

    assert_eq!(first, second);
    assert_eq!(first.translated_text, "[de] see you at the station");
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_translate_withFailingBackend_shouldSoftFailWithoutCaching() {
    let (context, backend) = common::context_with_mock(MockBackend::failing());
    let options = TranslateOptions::to("french").source("english");

    let result = context.translate("the station is closed", &options).await;
    assert_eq!(result.translated_text, "the station is closed");
    assert!(!result.is_translated);
    assert_eq!(result.mode, ResultMode::Translate);
    assert_eq!(context.cache_stats().size, 0);

    // nothing cached, so the next call tries again
    context.translate("the station is closed", &options).await;
    assert_eq!(backend.call_count(), 2);
}

#[tokio::test]
async fn test_translate_withEmptyOrEchoBackend_shouldTreatAsMiss() {
    for backend in [MockBackend::empty(), MockBackend::echo()] {
        let (context, observer) = common::context_with_mock(backend);
        let options = TranslateOptions::to("italian").source("english");

        let result = context.translate("see you at the station", &options).await;
        assert_eq!(result.translated_text, "see you at the station");
        assert!(!result.is_translated);
        assert_eq!(observer.call_count(), 1);
    }
}

#[tokio::test]
async fn test_translate_withBackend_shouldPassIsoCodes() {
    common::init_logging();
    let backend = RecordingBackend::new("hay una reunión mañana");
    let context = ResolverContext::with_backend(Arc::new(backend.clone()));
    let options = TranslateOptions::to("Spanish").source("te").mode(TranslationMode::Translate);

    let result = context.translate("  repu meeting undi  ", &options).await;

    assert_eq!(result.translated_text, "hay una reunión mañana");
    assert_eq!(result.original_text, "  repu meeting undi  ");
    assert_eq!(
        backend.calls(),
        vec![RecordedCall {
            text: "repu meeting undi".to_string(),
            source_code: "te".to_string(),
            target_code: "es".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_translate_withExplicitConvertMode_shouldTransliterate() {
    let context = common::offline_context();
    let options = TranslateOptions::to("telugu").source("english").mode(TranslationMode::Convert);
    let result = context.translate("nijam", &options).await;

    assert_eq!(result.translated_text, "నిజం");
    assert_eq!(result.mode, ResultMode::Convert);
}

#[tokio::test]
async fn test_translate_withUnsupportedTargetAndNoBackend_shouldReturnOriginal() {
    let context = common::offline_context();
    let options = TranslateOptions::to("klingon").source("english");
    let result = context.translate("prepare for battle", &options).await;

    assert_eq!(result.translated_text, "prepare for battle");
    assert!(!result.is_translated);
    assert_eq!(result.target_language, "klingon");
}

#[tokio::test]
async fn test_translate_withBlankText_shouldReturnItUnmodified() {
    let context = common::offline_context();
    let result = context
        .translate("  ", &TranslateOptions::to("hindi").mode(TranslationMode::Convert))
        .await;

    assert_eq!(result.translated_text, "  ");
    assert!(!result.is_translated);
    assert_eq!(result.mode, ResultMode::Convert);
}

#[tokio::test]
async fn test_resolver_withMotherTongue_shouldBiasDetection() {
    common::init_logging();
    let resolver = TranslationResolver::new(ScriptDetector::new(), TranslationCache::default())
        .with_mother_tongue(Some("telugu".to_string()));
    let context = ResolverContext::from_resolver(resolver);

    let result = context.translate("bagundi", &TranslateOptions::to("telugu")).await;
    assert_eq!(result.source_language, "telugu");
    assert_eq!(result.mode, ResultMode::Convert);
}

#[test]
fn test_context_helpers_shouldExposeCallerApi() {
    let context = common::offline_context();

    assert!(context.is_same_language("bangla", "bengali"));
    assert!(!context.is_same_language("hindi", "marathi"));

    let detection = context.detect_language("Wie geht es dir?", None);
    assert_eq!(detection.language, "german");
    assert!(detection.is_latin);

    assert_eq!(context.convert_to_native_script("nenu", "telugu"), "నేను");
}

#[tokio::test]
async fn test_translate_afterConvertOfSameText_shouldNotReuseConversion() {
    let backend = RecordingBackend::new("कल मिलते हैं");
    let context = ResolverContext::with_backend(Arc::new(backend.clone()));
    let convert = TranslateOptions::to("hindi").source("english").mode(TranslationMode::Convert);
    let translate = TranslateOptions::to("hindi").source("english").mode(TranslationMode::Translate);

    let converted = context.translate("kal milte hain", &convert).await;
    assert_eq!(converted.mode, ResultMode::Convert);
    assert!(backend.calls().is_empty());

    let translated = context.translate("kal milte hain", &translate).await;
    assert_eq!(translated.mode, ResultMode::Translate);
    assert_eq!(translated.translated_text, "कल मिलते हैं");
    assert_eq!(backend.calls().len(), 1);

    let again = context.translate("kal milte hain", &translate).await;
    assert_eq!(again, translated);
    assert_eq!(backend.calls().len(), 1);
    assert_eq!(context.cache_stats().size, 1);
}

/*!
 * Tests for translation cache functionality
 */

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lipi::translation::cache::{CacheKey, TranslationCache};
use lipi::{ResultMode, TranslationResult};

fn result(text: &str, translated: &str) -> TranslationResult {
    TranslationResult {
        translated_text: translated.to_string(),
        original_text: text.to_string(),
        source_language: "english".to_string(),
        target_language: "spanish".to_string(),
        is_translated: true,
        mode: ResultMode::Translate,
    }
}

fn key(text: &str) -> CacheKey {
    CacheKey::new(text, "english", "spanish")
}

#[test]
fn test_cache_store_withEnabledCache_shouldStoreResult() {
    let cache = TranslationCache::default();
    cache.store(key("hello"), result("hello", "hola"));

    let cached = cache.get(&key("hello")).unwrap();
    assert_eq!(cached.translated_text, "hola");
}

#[test]
fn test_cache_get_withDifferentLanguages_shouldReturnNone() {
    let cache = TranslationCache::default();
    cache.store(key("hello"), result("hello", "hola"));

    assert!(cache.get(&CacheKey::new("hello", "german", "spanish")).is_none());
    assert!(cache.get(&CacheKey::new("hello", "english", "french")).is_none());
}

#[test]
fn test_cache_key_withSurroundingWhitespace_shouldMatchTrimmedText() {
    let cache = TranslationCache::default();
    cache.store(key("  hello "), result("hello", "hola"));
    assert!(cache.get(&key("hello")).is_some());
}

#[test]
fn test_cache_disabled_shouldNeverStore() {
    let cache = TranslationCache::disabled();
    cache.store(key("hello"), result("hello", "hola"));
    assert!(cache.get(&key("hello")).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_cache_store_beyondCapacity_shouldEvictOldestFirst() {
    let cache = TranslationCache::new(2, None);
    cache.store(key("one"), result("one", "uno"));
    cache.store(key("two"), result("two", "dos"));
    cache.store(key("three"), result("three", "tres"));

    assert_eq!(cache.len(), 2);
    assert!(cache.get(&key("one")).is_none());
    assert!(cache.get(&key("two")).is_some());
    assert!(cache.get(&key("three")).is_some());
}

#[test]
fn test_cache_stats_shouldCountHitsAndMisses() {
    let cache = TranslationCache::new(10, None);
    cache.store(key("hello"), result("hello", "hola"));

    cache.get(&key("hello"));
    cache.get(&key("hello"));
    cache.get(&key("missing"));

    let stats = cache.stats();
    assert_eq!(stats.size, 1);
    assert_eq!(stats.capacity, 10);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert!((stats.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_cache_clear_shouldResetEntriesAndCounters() {
    let cache = TranslationCache::default();
    cache.store(key("hello"), result("hello", "hola"));
    cache.get(&key("hello"));

    cache.clear();
    let stats = cache.stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hits, 0);
}

#[test]
fn test_cache_get_afterTtl_shouldExpire() {
    let cache = TranslationCache::new(10, Some(Duration::from_millis(20)));
    cache.store(key("hello"), result("hello", "hola"));
    thread::sleep(Duration::from_millis(40));

    assert!(cache.get(&key("hello")).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache = TranslationCache::default();
    let other = cache.clone();
    other.store(key("hello"), result("hello", "hola"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_concurrentWriters_shouldNeverExceedCapacity() {
    let cache = Arc::new(TranslationCache::new(16, None));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100 {
                    let text = format!("w{}-{}", worker, i);
                    cache.store(key(&text), result(&text, "x"));
                    assert!(cache.len() <= 16);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(cache.len(), 16);
}

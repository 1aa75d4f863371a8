/*!
 * Translation caching functionality.
 *
 * A bounded memo of (text, source, target) to resolved result. Entries are
 * evicted oldest-first once capacity is reached, and lazily dropped on
 * lookup once their time-to-live has elapsed. Clones share storage, so one
 * cache can back every resolver handle in the process.
 */

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use parking_lot::Mutex;
use serde::Serialize;

use super::TranslationResult;

/// Default number of entries kept
pub const DEFAULT_CAPACITY: usize = 500;

/// Default entry lifetime
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Cache key combining trimmed text and normalized language names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Trimmed source text
    pub text: String,

    /// Canonical source language
    pub source_language: String,

    /// Canonical target language
    pub target_language: String,
}

impl CacheKey {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: TranslationResult,
    inserted_at: Instant,
    /// Insertion sequence number, matched against the eviction queue
    sequence: u64,
}

/// Storage guarded by one lock so insert and evict happen together
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    /// Insertion order; stale sequence numbers are skipped on eviction
    order: VecDeque<(CacheKey, u64)>,
    next_sequence: u64,
}

impl CacheState {
    fn evict_oldest(&mut self) -> bool {
        while let Some((key, sequence)) = self.order.pop_front() {
            let current = self.entries.get(&key).is_some_and(|entry| entry.sequence == sequence);
            if current {
                self.entries.remove(&key);
                return true;
            }
        }
        false
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Translation cache for storing and retrieving resolved results
#[derive(Debug, Clone)]
pub struct TranslationCache {
    /// Internal cache storage
    state: Arc<Mutex<CacheState>>,

    /// Cache hit counter
    hits: Arc<AtomicUsize>,

    /// Cache miss counter
    misses: Arc<AtomicUsize>,

    /// Whether caching is enabled
    enabled: Arc<AtomicBool>,

    capacity: usize,
    ttl: Option<Duration>,
}

impl TranslationCache {
    /// Create a cache holding at most `capacity` entries, each living at most `ttl`
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CacheState::default())),
            hits: Arc::new(AtomicUsize::new(0)),
            misses: Arc::new(AtomicUsize::new(0)),
            enabled: Arc::new(AtomicBool::new(true)),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Create a cache that never stores anything
    pub fn disabled() -> Self {
        let cache = Self::new(DEFAULT_CAPACITY, Some(DEFAULT_TTL));
        cache.set_enabled(false);
        cache
    }

    /// Get a result from the cache
    pub fn get(&self, key: &CacheKey) -> Option<TranslationResult> {
        if !self.is_enabled() {
            return None;
        }

        let mut state = self.state.lock();

        let expired = match state.entries.get(key) {
            Some(entry) => self.ttl.is_some_and(|ttl| entry.inserted_at.elapsed() >= ttl),
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for '{}' ({} -> {})",
                       truncate_text(&key.text, 30),
                       key.source_language,
                       key.target_language);
                return None;
            }
        };

        if expired {
            state.entries.remove(key);
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Cache entry expired for '{}' ({} -> {})",
                   truncate_text(&key.text, 30),
                   key.source_language,
                   key.target_language);
            return None;
        }

        self.hits.fetch_add(1, Ordering::Relaxed);
        debug!("Cache hit for '{}' ({} -> {})",
               truncate_text(&key.text, 30),
               key.source_language,
               key.target_language);

        state.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store a result, evicting the oldest entries beyond capacity.
    ///
    /// Re-storing a key moves it to the back of the eviction order.
    pub fn store(&self, key: CacheKey, value: TranslationResult) {
        if !self.is_enabled() {
            return;
        }

        let mut state = self.state.lock();

        let sequence = state.next_sequence;
        state.next_sequence += 1;

        debug!("Cached translation for '{}' ({} -> {})",
               truncate_text(&key.text, 30),
               key.source_language,
               key.target_language);

        state.order.push_back((key.clone(), sequence));
        state.entries.insert(key, CacheEntry { value, inserted_at: Instant::now(), sequence });

        while state.entries.len() > self.capacity {
            if !state.evict_oldest() {
                break;
            }
        }

        // Bound the queue when one key is re-stored over and over
        if state.order.len() > self.capacity * 2 {
            let CacheState { entries, order, .. } = &mut *state;
            order.retain(|(key, sequence)| entries.get(key).is_some_and(|entry| entry.sequence == *sequence));
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Clear the cache
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();

        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Enable or disable the cache for every handle sharing it
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, Some(DEFAULT_TTL))
    }
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}

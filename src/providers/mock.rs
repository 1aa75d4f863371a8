/*!
 * Mock backend implementations for testing.
 *
 * This module provides a mock backend that simulates different behaviors:
 * - `MockBackend::working()` - Always succeeds with a tagged translation
 * - `MockBackend::failing()` - Always fails with an error
 * - `MockBackend::empty()` - Answers with no text
 * - `MockBackend::echo()` - Answers with the input unchanged
 * - `MockBackend::slow(ms)` - Succeeds after a delay
 *
 * Clones share the call counter, so a test can hand one clone to a
 * resolver and assert on the other.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Custom response generator: (text, source_code, target_code) -> translation
pub type MockResponder = fn(&str, &str, &str) -> String;

/// Behavior mode for the mock backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with "[target] text"
    Working,
    /// Always fails with an error
    Failing,
    /// Returns empty response
    Empty,
    /// Returns the input text unchanged
    Echo,
    /// Simulates slow response
    Slow { delay_ms: u64 },
}

/// Mock backend for testing resolver behavior
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of calls made, shared between clones
    call_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    responder: Option<MockResponder>,
}

impl MockBackend {
    /// Create a new mock backend with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            responder: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Answer through a custom generator instead of the default tag
    pub fn with_responder(mut self, responder: MockResponder) -> Self {
        self.responder = Some(responder);
        self
    }

    /// Number of `translate_remote` calls so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn respond(&self, text: &str, source_code: &str, target_code: &str) -> String {
        match self.responder {
            Some(responder) => responder(text, source_code, target_code),
            None => format!("[{}] {}", target_code, text),
        }
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate_remote(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(self.respond(text, source_code, target_code)),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated backend failure".to_string(),
                status_code: 500,
            }),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Echo => Ok(text.to_string()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(self.respond(text, source_code, target_code))
            }
        }
    }
}

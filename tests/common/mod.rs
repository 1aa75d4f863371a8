/*!
 * Common test utilities for the lipi test suite
 */

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::{Arc, Once};
use tempfile::TempDir;

use lipi::errors::ProviderError;
use lipi::providers::mock::MockBackend;
use lipi::providers::TranslationBackend;
use lipi::ResolverContext;

static LOGGER: Once = Once::new();

/// Route library logs through env_logger (RUST_LOG) once per test binary
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Context with the offline tiers only
pub fn offline_context() -> ResolverContext {
    init_logging();
    ResolverContext::new()
}

/// Context backed by `backend`; the returned clone observes its call count
pub fn context_with_mock(backend: MockBackend) -> (ResolverContext, MockBackend) {
    init_logging();
    let observer = backend.clone();
    (ResolverContext::with_backend(Arc::new(backend)), observer)
}

/// One call seen by a `RecordingBackend`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub text: String,
    pub source_code: String,
    pub target_code: String,
}

/// Backend that records every request and answers with a fixed reply
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    reply: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingBackend {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl TranslationBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    async fn translate_remote(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, ProviderError> {
        self.calls.lock().push(RecordedCall {
            text: text.to_string(),
            source_code: source_code.to_string(),
            target_code: target_code.to_string(),
        });
        Ok(self.reply.clone())
    }
}

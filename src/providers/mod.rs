/*!
 * External semantic-translation backends.
 *
 * This module contains the backend interface consumed by the resolver and
 * its implementations:
 * - Ollama: local LLM server
 * - Mock: scripted behaviours for tests and offline use
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation backends
///
/// The resolver calls a backend at most once per resolution and treats any
/// error, empty text or echo of the input as a soft miss.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Short identifier used in log lines
    fn name(&self) -> &str;

    /// Translate `text` between two language codes
    ///
    /// # Arguments
    /// * `text` - Trimmed text to translate
    /// * `source_code` - ISO code of the source language
    /// * `target_code` - ISO code of the target language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate_remote(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, ProviderError>;
}

pub mod mock;
pub mod ollama;

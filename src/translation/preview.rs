/*!
 * Debounced translation preview while the user types.
 *
 * Every keystroke bumps a generation counter, aborts the pending task and
 * schedules a new one after the debounce window. A finished task publishes
 * through a `watch` channel only if its generation is still the newest, so a
 * slow resolution for an old prefix can never overwrite a newer one.
 */

use log::debug;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::context::ResolverContext;
use crate::app_config::PreviewConfig;
use super::{TranslateOptions, TranslationResult};

/// Result published for one keystroke
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewUpdate {
    pub generation: u64,
    /// Text as typed when the keystroke happened
    pub input: String,
    pub result: TranslationResult,
}

#[derive(Debug)]
pub struct TypingPreview {
    context: Arc<ResolverContext>,
    options: TranslateOptions,
    debounce: Duration,
    sender: Arc<watch::Sender<Option<PreviewUpdate>>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    generation: Arc<AtomicU64>,
}

impl TypingPreview {
    pub fn new(context: Arc<ResolverContext>, options: TranslateOptions, debounce: Duration) -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            context,
            options,
            debounce,
            sender: Arc::new(sender),
            pending: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Preview with the debounce window from configuration
    pub fn from_config(context: Arc<ResolverContext>, options: TranslateOptions, config: &PreviewConfig) -> Self {
        Self::new(context, options, config.debounce())
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Receiver that sees every published update
    pub fn subscribe(&self) -> watch::Receiver<Option<PreviewUpdate>> {
        self.sender.subscribe()
    }

    /// Most recently published update
    pub fn latest(&self) -> Option<PreviewUpdate> {
        self.sender.borrow().clone()
    }

    /// Generation of the newest keystroke
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Schedule a preview for the current text, superseding any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_keystroke(&self, text: impl Into<String>) -> u64 {
        let text = text.into();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let context = Arc::clone(&self.context);
        let options = self.options.clone();
        let debounce = self.debounce;
        let sender = Arc::clone(&self.sender);
        let latest = Arc::clone(&self.generation);

        let task = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if latest.load(Ordering::SeqCst) != generation {
                return;
            }

            let result = context.translate(&text, &options).await;

            sender.send_if_modified(|current| {
                let stale = latest.load(Ordering::SeqCst) != generation
                    || current.as_ref().is_some_and(|update| update.generation >= generation);
                if stale {
                    debug!("Dropping stale preview for keystroke {}", generation);
                    return false;
                }
                *current = Some(PreviewUpdate { generation, input: text, result });
                true
            });
        });

        if let Some(previous) = self.pending.lock().replace(task) {
            previous.abort();
        }

        generation
    }

    /// Abandon the pending preview, if any
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }
}

impl Drop for TypingPreview {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.get_mut().take() {
            pending.abort();
        }
    }
}

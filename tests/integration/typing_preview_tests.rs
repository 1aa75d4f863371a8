/*!
 * Tests for the debounced typing preview
 */

use std::sync::Arc;
use std::time::Duration;

use lipi::providers::mock::MockBackend;
use lipi::{ResolverContext, TranslateOptions, TypingPreview};

use crate::common;

const DEBOUNCE: Duration = Duration::from_millis(40);

fn preview_with(backend: MockBackend) -> (TypingPreview, MockBackend) {
    common::init_logging();
    let observer = backend.clone();
    let context = Arc::new(ResolverContext::with_backend(Arc::new(backend)));
    let options = TranslateOptions::to("french").source("english");
    (TypingPreview::new(context, options, DEBOUNCE), observer)
}

#[tokio::test]
async fn test_preview_withBurstOfKeystrokes_shouldResolveOnlyLastOne() {
    let (preview, backend) = preview_with(MockBackend::working());
    let mut updates = preview.subscribe();

    for text in ["s", "se", "see", "see y", "see you"] {
        preview.on_keystroke(text);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    tokio::time::timeout(Duration::from_secs(2), updates.changed())
        .await
        .expect("preview was never published")
        .unwrap();

    let update = updates.borrow().clone().unwrap();
    assert_eq!(update.input, "see you");
    assert_eq!(update.generation, 5);
    assert_eq!(update.result.translated_text, "[fr] see you");
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_preview_withSlowBackend_shouldNotLetStaleResultOverwrite() {
    let (preview, backend) = preview_with(MockBackend::slow(150));
    let mut updates = preview.subscribe();

    preview.on_keystroke("nice weather");
    // the first resolution is now in flight inside the slow backend
    tokio::time::sleep(DEBOUNCE + Duration::from_millis(30)).await;
    let last = preview.on_keystroke("nice weather there");

    tokio::time::timeout(Duration::from_secs(2), updates.changed())
        .await
        .expect("preview was never published")
        .unwrap();

    let update = preview.latest().unwrap();
    assert_eq!(update.generation, last);
    assert_eq!(update.input, "nice weather there");

    // give an aborted task every chance to publish
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(preview.latest().unwrap().generation, last);
    assert!(backend.call_count() >= 1);
}

#[tokio::test]
async fn test_preview_cancel_shouldPublishNothing() {
    let (preview, backend) = preview_with(MockBackend::working());

    preview.on_keystroke("see you");
    preview.cancel();
    tokio::time::sleep(DEBOUNCE * 3).await;

    assert!(preview.latest().is_none());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_preview_withSeparatePauses_shouldPublishEachTime() {
    let (preview, backend) = preview_with(MockBackend::working());
    let mut updates = preview.subscribe();

    preview.on_keystroke("see you");
    tokio::time::timeout(Duration::from_secs(2), updates.changed()).await.unwrap().unwrap();
    assert_eq!(updates.borrow_and_update().as_ref().unwrap().input, "see you");

    preview.on_keystroke("see you soon");
    tokio::time::timeout(Duration::from_secs(2), updates.changed()).await.unwrap().unwrap();
    assert_eq!(updates.borrow_and_update().as_ref().unwrap().input, "see you soon");

    assert_eq!(backend.call_count(), 2);
}

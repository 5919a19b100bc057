//! Session coordinator.
//!
//! Owns the transient in-memory batch, drives the generation client, and
//! synchronizes results into the gallery and prompt-history stores. Every
//! store interaction is a full read-modify-write cycle; the coordinator never
//! holds a long-lived reference into the store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use super::model::{BatchPhase, BatchState};
use crate::client::GenerationClient;
use crate::gallery::{
    GalleryRepository, GeneratedImage, ImageProvenance, PROMPT_HISTORY_LIMIT,
    PromptHistoryRepository,
};
use crate::settings::{GenerationSettings, SettingsPatch};

/// Message shown after a successful batch.
const GENERATED_MESSAGE: &str = "Images generated successfully!";

/// Coordinates generation requests against the in-memory batch and the
/// durable stores.
///
/// Cloneable; clones share the same batch state. The state lock is never held
/// across a network await, which is what lets edits on different images run
/// concurrently without interfering. The coordinator does not gate concurrent
/// batch generations or repeated edits of the same image beyond the per-slot
/// `is_loading` flag; the caller is expected to disable those in its surface.
#[derive(Clone)]
pub struct SessionManager {
    state: Arc<Mutex<BatchState>>,
    client: GenerationClient,
    gallery: Arc<dyn GalleryRepository>,
    history: Arc<dyn PromptHistoryRepository>,
}

impl SessionManager {
    /// Creates a coordinator over the given client and store backends.
    pub fn new(
        client: GenerationClient,
        gallery: Arc<dyn GalleryRepository>,
        history: Arc<dyn PromptHistoryRepository>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(BatchState::default())),
            client,
            gallery,
            history,
        }
    }

    /// Returns a snapshot of the current batch state.
    pub async fn batch(&self) -> BatchState {
        self.state.lock().await.clone()
    }

    /// Runs a full batch generation for `prompt`.
    ///
    /// Transitions the batch to `Generating`, records the prompt into the
    /// history, and invokes the client. On success the batch becomes `Ready`,
    /// the new images replace the in-memory batch and are appended to the
    /// gallery. On failure the batch becomes `Failed` with a user-facing
    /// message, the prior images are left untouched, and nothing is appended.
    pub async fn start_generation(&self, prompt: &str, style_id: &str, patch: &SettingsPatch) {
        {
            let mut state = self.state.lock().await;
            state.phase = BatchPhase::Generating;
            state.message = None;
        }
        self.record_prompt(prompt);

        let count = patch
            .image_count
            .unwrap_or(GenerationSettings::default().image_count);

        match self
            .client
            .generate_images(prompt, style_id, count, patch)
            .await
        {
            Ok(results) => {
                let images: Vec<GeneratedImage> = results
                    .into_iter()
                    .map(|result| {
                        let provenance = ImageProvenance {
                            seed: result.settings.seed,
                            model: result.settings.style.clone(),
                        };
                        GeneratedImage::new(result.url, prompt, provenance)
                    })
                    .collect();

                self.gallery.append(&images);

                let mut state = self.state.lock().await;
                state.images = images;
                state.phase = BatchPhase::Ready;
                state.message = Some(GENERATED_MESSAGE.to_string());
            }
            Err(err) => {
                warn!("batch generation failed: {err}");
                let mut state = self.state.lock().await;
                state.phase = BatchPhase::Failed;
                state.message = Some(err.to_string());
            }
        }
    }

    /// Re-generates a single image of the current batch with a new prompt,
    /// reusing the image's original seed.
    ///
    /// Only the targeted slot's `is_loading` flag is raised; other images are
    /// unaffected and may be edited concurrently. On success the slot is
    /// replaced in place and the gallery record matching the prior url is
    /// updated. On failure the flag is reverted and the image content is left
    /// unchanged. An out-of-range index, or a slot whose edit is already in
    /// flight, is a no-op.
    pub async fn start_edit(&self, index: usize, edit_prompt: &str) {
        let prior = {
            let mut state = self.state.lock().await;
            match state.images.get_mut(index) {
                Some(slot) if !slot.is_loading => {
                    let prior = slot.clone();
                    slot.is_loading = true;
                    prior
                }
                _ => return,
            }
        };

        let patch = SettingsPatch {
            seed: Some(prior.settings.seed),
            ..Default::default()
        };

        match self.client.generate_one(edit_prompt, &patch, true).await {
            Ok(result) => {
                let provenance = ImageProvenance {
                    seed: result.settings.seed,
                    model: result.settings.style.clone(),
                };
                let edited = GeneratedImage::new(result.url, edit_prompt, provenance);

                self.gallery.replace_by_url(&prior.url, edited.clone());

                let mut state = self.state.lock().await;
                if let Some(slot) = state.images.get_mut(index) {
                    *slot = edited;
                }
            }
            Err(err) => {
                // Data-level silent revert; the caller surfaces the failure.
                warn!("edit failed for image {index}: {err}");
                let mut state = self.state.lock().await;
                if let Some(slot) = state.images.get_mut(index) {
                    slot.is_loading = false;
                }
            }
        }
    }

    /// Prepends the prompt to the bounded history slot.
    fn record_prompt(&self, prompt: &str) {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return;
        }
        let mut prompts = self.history.load_all();
        prompts.insert(0, trimmed.to_string());
        prompts.truncate(PROMPT_HISTORY_LIMIT);
        self.history.save_all(&prompts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ImageTransport, TransportReply};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gallery mock counting writes so tests can assert `append` never ran.
    struct RecordingGallery {
        images: StdMutex<Vec<GeneratedImage>>,
        saves: AtomicUsize,
    }

    impl RecordingGallery {
        fn new() -> Self {
            Self {
                images: StdMutex::new(Vec::new()),
                saves: AtomicUsize::new(0),
            }
        }
    }

    impl GalleryRepository for RecordingGallery {
        fn load_all(&self) -> Vec<GeneratedImage> {
            self.images.lock().unwrap().clone()
        }

        fn save_all(&self, images: &[GeneratedImage]) {
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.images.lock().unwrap() = images.to_vec();
        }
    }

    struct InMemoryHistory {
        prompts: StdMutex<Vec<String>>,
    }

    impl InMemoryHistory {
        fn new() -> Self {
            Self {
                prompts: StdMutex::new(Vec::new()),
            }
        }
    }

    impl PromptHistoryRepository for InMemoryHistory {
        fn load_all(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }

        fn save_all(&self, prompts: &[String]) {
            *self.prompts.lock().unwrap() = prompts.to_vec();
        }
    }

    struct StubTransport {
        status: u16,
    }

    #[async_trait]
    impl ImageTransport for StubTransport {
        async fn fetch(&self, _url: &str) -> anyhow::Result<TransportReply> {
            Ok(TransportReply {
                status: self.status,
                content_type: Some("image/jpeg".to_string()),
            })
        }

        async fn fetch_bytes(&self, _url: &str) -> anyhow::Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    struct TestHarness {
        manager: SessionManager,
        gallery: Arc<RecordingGallery>,
        history: Arc<InMemoryHistory>,
    }

    fn harness(status: u16) -> TestHarness {
        let gallery = Arc::new(RecordingGallery::new());
        let history = Arc::new(InMemoryHistory::new());
        let client = GenerationClient::with_transport(Arc::new(StubTransport { status }));
        let manager = SessionManager::new(client, gallery.clone(), history.clone());
        TestHarness {
            manager,
            gallery,
            history,
        }
    }

    #[tokio::test]
    async fn test_successful_generation_updates_batch_and_gallery() {
        let h = harness(200);

        h.manager
            .start_generation("a castle", "anime", &SettingsPatch::default())
            .await;

        let batch = h.manager.batch().await;
        assert_eq!(batch.phase, BatchPhase::Ready);
        assert_eq!(batch.images.len(), 2);
        assert_eq!(batch.message.as_deref(), Some(GENERATED_MESSAGE));
        assert_eq!(batch.images[0].prompt, "a castle");
        assert_eq!(batch.images[0].settings.model, "anime");
        assert!(!batch.images[0].is_loading);

        // Appended to the gallery in batch order.
        assert_eq!(h.gallery.load_all(), batch.images);
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_prior_batch_untouched() {
        let h = harness(200);
        h.manager
            .start_generation("a castle", "balanced", &SettingsPatch::default())
            .await;
        let prior = h.manager.batch().await.images;
        let saves_before = h.gallery.saves.load(Ordering::SeqCst);

        // Subsequent batch fails at the service.
        let failing = SessionManager::new(
            GenerationClient::with_transport(Arc::new(StubTransport { status: 500 })),
            h.gallery.clone(),
            h.history.clone(),
        );
        // Carry over the prior batch into the failing manager's state.
        failing
            .state
            .lock()
            .await
            .images
            .clone_from(&prior);

        failing
            .start_generation("a ship", "balanced", &SettingsPatch::default())
            .await;

        let batch = failing.batch().await;
        assert_eq!(batch.phase, BatchPhase::Failed);
        assert_eq!(batch.images, prior);
        assert!(batch.message.is_some());
        // No partial gallery writes from a failed batch.
        assert_eq!(h.gallery.saves.load(Ordering::SeqCst), saves_before);
    }

    #[tokio::test]
    async fn test_generation_records_prompt_history() {
        let h = harness(200);

        for i in 0..12 {
            h.manager
                .start_generation(&format!("prompt {i}"), "balanced", &SettingsPatch::default())
                .await;
        }

        let prompts = h.history.load_all();
        assert_eq!(prompts.len(), PROMPT_HISTORY_LIMIT);
        // Most recent first.
        assert_eq!(prompts[0], "prompt 11");
        assert_eq!(prompts[9], "prompt 2");
    }

    #[tokio::test]
    async fn test_edit_replaces_image_in_place_and_in_gallery() {
        let h = harness(200);
        h.manager
            .start_generation("a castle", "balanced", &SettingsPatch::default())
            .await;
        let before = h.manager.batch().await.images;
        let original_seed = before[0].settings.seed;

        h.manager.start_edit(0, "a castle at night").await;

        let batch = h.manager.batch().await;
        assert_eq!(batch.images.len(), 2);
        assert_eq!(batch.images[0].prompt, "a castle at night");
        assert!(!batch.images[0].is_loading);
        // Keep-seed policy: the edit reuses the original image's seed.
        assert_eq!(batch.images[0].settings.seed, original_seed);
        // The untouched slot is unaffected.
        assert_eq!(batch.images[1], before[1]);

        // Gallery record replaced under the prior url.
        let gallery = h.gallery.load_all();
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0], batch.images[0]);
    }

    #[tokio::test]
    async fn test_failed_edit_reverts_loading_flag_only() {
        let h = harness(200);
        h.manager
            .start_generation("a castle", "balanced", &SettingsPatch::default())
            .await;
        let before = h.manager.batch().await.images;

        let failing = SessionManager::new(
            GenerationClient::with_transport(Arc::new(StubTransport { status: 503 })),
            h.gallery.clone(),
            h.history.clone(),
        );
        failing.state.lock().await.images.clone_from(&before);

        failing.start_edit(0, "a castle at night").await;

        let batch = failing.batch().await;
        assert_eq!(batch.images, before);
        assert!(!batch.images[0].is_loading);
    }

    #[tokio::test]
    async fn test_edit_out_of_range_is_noop() {
        let h = harness(200);

        h.manager.start_edit(3, "anything").await;

        let batch = h.manager.batch().await;
        assert_eq!(batch.phase, BatchPhase::Idle);
        assert!(batch.images.is_empty());
        assert_eq!(h.gallery.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_validation_failure_marks_batch_failed() {
        let h = harness(200);

        h.manager
            .start_generation("   ", "balanced", &SettingsPatch::default())
            .await;

        let batch = h.manager.batch().await;
        assert_eq!(batch.phase, BatchPhase::Failed);
        assert!(batch.message.is_some());
        // An empty prompt is never recorded into the history.
        assert!(h.history.load_all().is_empty());
    }
}

//! File-backed gallery repository.

use dreamator_core::gallery::{GalleryRepository, GeneratedImage};
use tracing::warn;

use crate::slot_storage::JsonSlotStorage;

/// Storage key for the gallery slot.
const GALLERY_KEY: &str = "dreamator_images";

/// Gallery repository persisting the whole collection as one JSON array.
///
/// Follows the store policies: lenient reads (anything absent or unparseable
/// is an empty gallery) and best-effort writes (failures are logged and
/// swallowed, never surfaced to callers).
#[derive(Debug, Clone)]
pub struct JsonGalleryRepository {
    storage: JsonSlotStorage,
}

impl JsonGalleryRepository {
    /// Creates a repository over the given slot storage.
    pub fn new(storage: JsonSlotStorage) -> Self {
        Self { storage }
    }
}

impl GalleryRepository for JsonGalleryRepository {
    fn load_all(&self) -> Vec<GeneratedImage> {
        let Some(payload) = self.storage.read(GALLERY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&payload) {
            Ok(images) => images,
            Err(err) => {
                warn!("unparseable gallery payload, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    fn save_all(&self, images: &[GeneratedImage]) {
        let payload = match serde_json::to_string(images) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize gallery: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.write(GALLERY_KEY, &payload) {
            warn!("failed to persist gallery: {err}");
        }
    }
}

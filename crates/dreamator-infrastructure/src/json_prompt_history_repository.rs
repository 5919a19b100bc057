//! File-backed prompt history repository.

use dreamator_core::gallery::PromptHistoryRepository;
use tracing::warn;

use crate::slot_storage::JsonSlotStorage;

/// Storage key for the prompt history slot.
const HISTORY_KEY: &str = "promptHistory";

/// Prompt history repository persisting the list as one JSON array.
///
/// Same lenient-read and best-effort-write policies as the gallery; the two
/// slots are fully independent.
#[derive(Debug, Clone)]
pub struct JsonPromptHistoryRepository {
    storage: JsonSlotStorage,
}

impl JsonPromptHistoryRepository {
    /// Creates a repository over the given slot storage.
    pub fn new(storage: JsonSlotStorage) -> Self {
        Self { storage }
    }
}

impl PromptHistoryRepository for JsonPromptHistoryRepository {
    fn load_all(&self) -> Vec<String> {
        let Some(payload) = self.storage.read(HISTORY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&payload) {
            Ok(prompts) => prompts,
            Err(err) => {
                warn!("unparseable prompt history payload, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    fn save_all(&self, prompts: &[String]) {
        let payload = match serde_json::to_string(prompts) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize prompt history: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.write(HISTORY_KEY, &payload) {
            warn!("failed to persist prompt history: {err}");
        }
    }
}

//! Persisted gallery records.

use serde::{Deserialize, Serialize};

/// Subset of the generation settings persisted with each image.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ImageProvenance {
    /// Seed the image was generated with
    pub seed: i64,
    /// Style catalog id used for the generation
    pub model: String,
}

/// A single gallery record.
///
/// The fully parameterized request URL is the durable identity of the image;
/// the image bytes themselves are never stored. Duplicates (same url) are
/// permitted, since the same prompt and seed pair can be regenerated.
///
/// Records serialize with camelCase field names so galleries written by older
/// clients round-trip unchanged.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// The resolved, fully-parameterized fetch location
    pub url: String,
    /// Original user prompt, before style suffixing
    pub prompt: String,
    /// Transient UI flag: an edit prompt is open for this image
    #[serde(default)]
    pub is_editing: bool,
    /// Transient UI flag: an edit request is in flight for this image
    #[serde(default)]
    pub is_loading: bool,
    /// Settings subset actually persisted
    pub settings: ImageProvenance,
}

impl GeneratedImage {
    /// Creates a record with both transient flags cleared.
    pub fn new(url: impl Into<String>, prompt: impl Into<String>, settings: ImageProvenance) -> Self {
        Self {
            url: url.into(),
            prompt: prompt.into(),
            is_editing: false,
            is_loading: false,
            settings,
        }
    }
}

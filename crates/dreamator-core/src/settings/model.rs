//! Settings value objects for image generation requests.

use serde::{Deserialize, Serialize};

/// Sentinel seed value meaning "assign a random seed".
pub const SEED_RANDOM: i64 = -1;

/// Output shape of a generated image.
///
/// Each ratio maps deterministically to a fixed pixel dimension pair.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Square,
    Vertical,
    Horizontal,
}

impl AspectRatio {
    /// Returns the (width, height) pair for this ratio.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1024, 1024),
            AspectRatio::Vertical => (768, 1024),
            AspectRatio::Horizontal => (1024, 768),
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

/// Fully resolved settings for a single generation request.
///
/// Produced by [`resolve`](super::resolve); `image_count` is always in
/// `[1, 4]` and `seed` is either a concrete value or [`SEED_RANDOM`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Style catalog id (e.g. "balanced", "anime")
    pub style: String,
    /// Seed controlling the pseudo-random aspects of generation
    pub seed: i64,
    /// Whether the service should enhance the prompt
    pub enhance: bool,
    /// Whether the service watermark is suppressed
    pub nologo: bool,
    /// Whether the image is kept out of public feeds
    pub private: bool,
    /// Whether the safety filter is applied
    pub safe: bool,
    /// Number of images requested per batch, clamped to `[1, 4]`
    pub image_count: u8,
    /// Output shape of the generated image
    pub aspect_ratio: AspectRatio,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            style: "balanced".to_string(),
            seed: SEED_RANDOM,
            enhance: true,
            nologo: true,
            private: true,
            safe: true,
            image_count: 2,
            aspect_ratio: AspectRatio::Square,
        }
    }
}

/// Caller-supplied partial settings.
///
/// Every field is optional; absent fields fall back to the defaults when
/// resolved. Note that supplying a `seed` alone does not preserve it — seed
/// reuse must be requested explicitly per call (see
/// [`resolve`](super::resolve)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub style: Option<String>,
    pub seed: Option<i64>,
    pub enhance: Option<bool>,
    pub nologo: Option<bool>,
    pub private: Option<bool>,
    pub safe: Option<bool>,
    pub image_count: Option<u8>,
    pub aspect_ratio: Option<AspectRatio>,
}

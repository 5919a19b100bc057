//! Generation client: issues requests and normalizes every failure path.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::transport::{HttpImageTransport, ImageTransport};
use crate::error::{DreamatorError, Result};
use crate::request::{DEFAULT_BASE_URL, build_request};
use crate::settings::{GenerationSettings, SettingsPatch, resolve};

/// A successful generation outcome.
///
/// `settings` echoes back the fully resolved settings actually used, style id
/// and seed included, so callers can persist or reuse them.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenerationResult {
    /// The fully parameterized request URL; the durable image identity
    pub url: String,
    /// The resolved settings the image was generated with
    pub settings: GenerationSettings,
}

/// Client for the image generation endpoint.
///
/// All failure paths are normalized into [`DreamatorError`] before returning;
/// no raw transport error ever escapes. The client performs no automatic
/// retries — callers decide whether to re-invoke.
#[derive(Clone)]
pub struct GenerationClient {
    transport: Arc<dyn ImageTransport>,
    base_url: String,
}

impl GenerationClient {
    /// Creates a client against the default generation host.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpImageTransport::new()))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn ImageTransport>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the generation host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Requests `count` images concurrently for one prompt.
    ///
    /// Every request is issued before any is awaited, and the call resolves
    /// only once all of them have settled. Each request resolves its own
    /// random seed, so a batch of N yields N distinct results by default.
    ///
    /// # Errors
    ///
    /// If any one request fails, the whole batch fails; no partial list is
    /// returned. Callers wanting per-slot results should call
    /// [`generate_one`](Self::generate_one) individually.
    pub async fn generate_images(
        &self,
        prompt: &str,
        style_id: &str,
        count: u8,
        patch: &SettingsPatch,
    ) -> Result<Vec<GenerationResult>> {
        let count = count.clamp(1, 4);
        let mut patch = patch.clone();
        patch.style = Some(style_id.to_string());

        let requests = (0..count).map(|_| self.generate_one(prompt, &patch, false));
        let settled = join_all(requests).await;

        let mut results = Vec::with_capacity(settled.len());
        for outcome in settled {
            results.push(outcome?);
        }
        Ok(results)
    }

    /// Requests a single image.
    ///
    /// With `keep_seed` set and a non-sentinel seed in `patch`, the existing
    /// seed is reused (edit flow); otherwise a fresh one is drawn.
    ///
    /// # Errors
    ///
    /// - [`DreamatorError::Validation`] for an empty prompt (no network
    ///   activity)
    /// - [`DreamatorError::ServiceUnavailable`] for HTTP 5xx responses
    /// - [`DreamatorError::Generation`] for any other bad status, a non-image
    ///   content type, or a network-level failure
    pub async fn generate_one(
        &self,
        prompt: &str,
        patch: &SettingsPatch,
        keep_seed: bool,
    ) -> Result<GenerationResult> {
        let settings = resolve(patch, keep_seed);
        let descriptor = build_request(&self.base_url, prompt, &settings)?;

        let reply = match self.transport.fetch(&descriptor.url).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("generation request failed at transport level: {err}");
                return Err(DreamatorError::generation(
                    "Failed to generate image. Please try again.",
                ));
            }
        };

        if (500..600).contains(&reply.status) {
            return Err(DreamatorError::service_unavailable(
                "The image generation service is currently unavailable. Please try again later.",
            ));
        }
        if !(200..300).contains(&reply.status) {
            return Err(DreamatorError::generation(format!(
                "Failed to generate image: HTTP {}",
                reply.status
            )));
        }
        match reply.content_type.as_deref() {
            Some(content_type) if content_type.starts_with("image/") => {}
            _ => {
                return Err(DreamatorError::generation("Invalid response from the server"));
            }
        }

        debug!(seed = settings.seed, style = %settings.style, "generated image");
        Ok(GenerationResult {
            url: descriptor.url,
            settings,
        })
    }

    /// Fetches the raw bytes behind a generated image URL (download flow).
    ///
    /// # Errors
    ///
    /// Any failure is normalized into [`DreamatorError::Generation`].
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        self.transport.fetch_bytes(url).await.map_err(|err| {
            warn!("image download failed: {err}");
            DreamatorError::generation("Failed to download image. Please try again.")
        })
    }
}

impl Default for GenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

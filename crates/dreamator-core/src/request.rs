//! Builds fully parameterized request descriptors for the generation
//! endpoint.

use crate::error::{DreamatorError, Result};
use crate::settings::{GenerationSettings, SEED_RANDOM};
use crate::style::find_style;

/// Default host of the image generation service.
pub const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai";

/// Fixed generation-quality parameters sent with every request.
const GUIDANCE: &str = "8";
const STEPS: &str = "30";

/// A fully materialized GET request against the generation endpoint.
///
/// The URL, query string included, doubles as the durable identity of the
/// generated image; the byte stream behind it is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Fully parameterized request URL
    pub url: String,
    /// HTTP method; the generation endpoint only accepts GET
    pub method: &'static str,
}

/// Builds the request descriptor for one generation call.
///
/// The final prompt text is the trimmed user prompt with the resolved style
/// profile's suffix concatenated verbatim (repeated descriptors are not
/// deduplicated), percent-encoded as a path segment. Query parameters appear
/// in a fixed order, so identical inputs yield byte-identical URLs.
///
/// # Errors
///
/// Returns [`DreamatorError::Validation`] if `prompt` is empty or
/// whitespace-only; nothing is ever sent over the network for such input.
pub fn build_request(
    base_url: &str,
    prompt: &str,
    settings: &GenerationSettings,
) -> Result<RequestDescriptor> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(DreamatorError::validation("Prompt is required"));
    }

    let profile = find_style(&settings.style);
    let final_prompt = format!("{}{}", trimmed, profile.prompt_suffix);
    let (width, height) = settings.aspect_ratio.dimensions();

    let mut params: Vec<(&str, String)> = Vec::new();
    if settings.seed != SEED_RANDOM {
        params.push(("seed", settings.seed.to_string()));
    }
    params.push(("enhance", settings.enhance.to_string()));
    params.push(("nologo", settings.nologo.to_string()));
    params.push(("private", settings.private.to_string()));
    params.push(("safe", settings.safe.to_string()));
    params.push(("width", width.to_string()));
    params.push(("height", height.to_string()));
    params.push(("guidance", GUIDANCE.to_string()));
    params.push(("steps", STEPS.to_string()));

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let url = format!(
        "{}/prompt/{}?{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&final_prompt),
        query
    );

    Ok(RequestDescriptor { url, method: "GET" })
}

//! Style profile catalog.
//!
//! Fixed set of prompt-augmentation presets. Each profile appends a fixed
//! descriptive suffix to the user's prompt before submission. The catalog is
//! process-wide immutable configuration; it has no lifecycle beyond process
//! lifetime.

/// A named preset that appends a fixed descriptive suffix to the user's
/// prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    /// Catalog id (e.g. "balanced")
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Suffix concatenated verbatim onto the trimmed user prompt
    pub prompt_suffix: &'static str,
}

/// The five fixed style profiles, in catalog order.
///
/// The first entry (`balanced`) doubles as the fallback for unknown ids.
pub const STYLE_PROFILES: &[StyleProfile] = &[
    StyleProfile {
        id: "balanced",
        label: "Balanced",
        description: "Best for general purpose image generation with optimal quality and speed balance",
        prompt_suffix: ", masterpiece, best quality, highly detailed, 8k uhd, professional, sharp focus",
    },
    StyleProfile {
        id: "photorealistic",
        label: "Photorealistic",
        description: "Creates highly realistic photographs with exceptional detail and lighting",
        prompt_suffix: ", hyperrealistic, photorealistic, octane render, 8k uhd, professional photography, cinematic lighting, dramatic atmosphere, photorealistic details, award-winning photography, masterpiece, sharp focus, high dynamic range shallow-focus, 35mm, photorealistic, Canon EOS 5D Mark IV DSLR, f/5.6 aperture, 1/125 second shutter speed, ISO 100 --ar 2:3 --q 2 --v 4",
    },
    StyleProfile {
        id: "anime",
        label: "Anime Style",
        description: "Generates anime and manga style artwork with vibrant colors and distinct aesthetics",
        prompt_suffix: ", anime masterpiece, high quality anime art, Studio Ghibli style, detailed anime illustration, vibrant colors, beautiful anime artwork, professional anime art, manga style, cel shaded, clean lines, anime key visual absurdres like naruto style",
    },
    StyleProfile {
        id: "3d",
        label: "3D Render",
        description: "Creates detailed 3D rendered scenes with professional quality Like Cartoon",
        prompt_suffix: ", professional 3D render, octane render, cinema 4d, unreal engine 5, ray tracing, subsurface scattering, volumetric lighting, high detail textures, 8k textures, physically based rendering 3d closeup Pixar render, unreal engine cinematic smooth, intricate detail, cinematic",
    },
    StyleProfile {
        id: "logo",
        label: "Logo Design",
        description: "Generates professional and modern logo designs with clean aesthetics",
        prompt_suffix: ", professional logo design, minimalist, vector art, clean design, corporate branding, scalable, iconic logo, professional graphic design, modern logo, commercial quality abstract logo incorporating clean lines and geometric shapes luxurious, minimalist, etc. ",
    },
];

/// Looks up a profile by id, falling back to the first catalog entry
/// (`balanced`) for unknown ids.
pub fn find_style(id: &str) -> &'static StyleProfile {
    STYLE_PROFILES
        .iter()
        .find(|profile| profile.id == id)
        .unwrap_or(&STYLE_PROFILES[0])
}

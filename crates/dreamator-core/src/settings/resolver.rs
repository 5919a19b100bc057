//! Resolves partial settings into a complete, validated settings object.

use rand::Rng;

use super::model::{GenerationSettings, SEED_RANDOM, SettingsPatch};

/// Exclusive upper bound for randomly assigned seeds (2^31 - 1), giving the
/// inclusive range `[0, 2^31 - 2]`.
const SEED_SPAN: i64 = 2_147_483_647;

/// Merges `patch` over the fixed defaults and resolves the seed.
///
/// Random seeds are the default stance: a fresh seed is drawn uniformly from
/// `[0, 2^31 - 2]` unless `keep_seed` is set *and* the patch carries a
/// non-sentinel seed (the edit flow's keep-seed policy). Merely supplying a
/// seed in the patch is not enough to preserve it.
///
/// `image_count` is clamped to `[1, 4]` before use. Pure apart from the
/// process-wide RNG.
pub fn resolve(patch: &SettingsPatch, keep_seed: bool) -> GenerationSettings {
    let defaults = GenerationSettings::default();

    let seed = match patch.seed {
        Some(seed) if keep_seed && seed != SEED_RANDOM => seed,
        _ => rand::thread_rng().gen_range(0..SEED_SPAN),
    };

    GenerationSettings {
        style: patch.style.clone().unwrap_or(defaults.style),
        seed,
        enhance: patch.enhance.unwrap_or(defaults.enhance),
        nologo: patch.nologo.unwrap_or(defaults.nologo),
        private: patch.private.unwrap_or(defaults.private),
        safe: patch.safe.unwrap_or(defaults.safe),
        image_count: patch.image_count.unwrap_or(defaults.image_count).clamp(1, 4),
        aspect_ratio: patch.aspect_ratio.unwrap_or(defaults.aspect_ratio),
    }
}

//! Generation settings domain module.
//!
//! # Module Structure
//!
//! - `model`: Settings value objects (`GenerationSettings`, `SettingsPatch`,
//!   `AspectRatio`)
//! - `resolver`: Merges partial settings over the fixed defaults and applies
//!   the seed policy

mod model;
mod resolver;

// Re-export public API
pub use model::{AspectRatio, GenerationSettings, SEED_RANDOM, SettingsPatch};
pub use resolver::resolve;

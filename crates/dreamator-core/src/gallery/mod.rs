//! Gallery domain module.
//!
//! # Module Structure
//!
//! - `model`: Persisted gallery records (`GeneratedImage`, `ImageProvenance`)
//! - `repository`: Repository traits for the gallery and prompt history slots

mod model;
mod repository;

// Re-export public API
pub use model::{GeneratedImage, ImageProvenance};
pub use repository::{GalleryRepository, PROMPT_HISTORY_LIMIT, PromptHistoryRepository};

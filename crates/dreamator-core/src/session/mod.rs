//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: In-memory batch state (`BatchPhase`, `BatchState`)
//! - `manager`: The session coordinator (`SessionManager`) driving the
//!   generation client and synchronizing results into the gallery

mod manager;
mod model;

// Re-export public API
pub use manager::SessionManager;
pub use model::{BatchPhase, BatchState};

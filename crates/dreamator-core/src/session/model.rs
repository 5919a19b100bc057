//! In-memory state of the current generation batch.

use crate::gallery::GeneratedImage;

/// Lifecycle phase of the current batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    /// No generation has been requested yet
    Idle,
    /// A batch request is in flight
    Generating,
    /// The last batch completed successfully
    Ready,
    /// The last batch failed; any prior images are left untouched
    Failed,
}

/// The in-memory batch owned exclusively by the session coordinator.
///
/// `message` is the single slot reflecting the outcome of the most recent
/// generation attempt. Per-image edit state lives on the records themselves
/// (`is_loading`).
#[derive(Debug, Clone, PartialEq)]
pub struct BatchState {
    /// Current lifecycle phase
    pub phase: BatchPhase,
    /// Images of the most recent successful batch
    pub images: Vec<GeneratedImage>,
    /// User-facing outcome of the most recent generation attempt
    pub message: Option<String>,
}

impl Default for BatchState {
    fn default() -> Self {
        Self {
            phase: BatchPhase::Idle,
            images: Vec::new(),
            message: None,
        }
    }
}

//! Error types for the Dreamator client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the generation pipeline.
///
/// Every failure path is normalized into one of these tagged variants before
/// it reaches a caller; no transport-level error escapes the client layer.
/// All variants are recoverable at the call site and carry a user-facing
/// message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DreamatorError {
    /// Bad input that is rejected before any network activity (e.g. an empty
    /// prompt).
    #[error("{0}")]
    Validation(String),

    /// Transient server-side failure (HTTP 5xx); safe to retry later.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Any other request failure: bad status, wrong content type, or a
    /// network-level error.
    #[error("{0}")]
    Generation(String),
}

impl DreamatorError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a ServiceUnavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Creates a Generation error
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a ServiceUnavailable error
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Self::ServiceUnavailable(_))
    }

    /// Check if this is a Generation error
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

/// A type alias for `Result<T, DreamatorError>`.
pub type Result<T> = std::result::Result<T, DreamatorError>;

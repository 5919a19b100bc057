//! Generation client module.
//!
//! # Module Structure
//!
//! - `transport`: Network seam (`ImageTransport`) and its reqwest-backed
//!   implementation
//! - `service`: The client itself (`GenerationClient`) with failure
//!   classification and batch join semantics

mod service;
mod transport;

// Re-export public API
pub use service::{GenerationClient, GenerationResult};
pub use transport::{HttpImageTransport, ImageTransport, TransportReply};

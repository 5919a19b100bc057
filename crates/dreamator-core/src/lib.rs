pub mod client;
pub mod error;
pub mod gallery;
pub mod request;
pub mod session;
pub mod settings;
pub mod style;

// Re-export common error type
pub use error::{DreamatorError, Result};

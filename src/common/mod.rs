//! Common types and utilities shared across the crate.

// Submodule declarations
pub mod detection;
pub mod error;

// Re-exports for convenience
pub use detection::{detect_odf_format, detect_package};
pub use error::{Error, Result};

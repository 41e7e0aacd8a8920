//! Unified error types for the ODF container.
//!
//! Every failure raised while loading, editing or saving a package is
//! reported through the single [`Error`] enum.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};

//! Package format detection.
//!
//! Detection is based on the ZIP signature and, for ZIP packages, the
//! `mimetype` member; flat XML documents are recognized by their
//! `office:mimetype` attribute.

// Submodule declarations
pub mod odf;
pub mod utils;

// Re-exports
pub use odf::{DetectedPackage, detect_odf_format, detect_package};
pub use utils::{ZIP_SIGNATURE, has_zip_signature};

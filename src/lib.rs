//! Litchi ODF - OpenDocument package container
//!
//! This library opens OpenDocument Format packages, gives access to their
//! parts, records edits, and writes them back out as valid ODF packages.
//!
//! # Features
//!
//! - **Both encodings**: ZIP packages (.odt, .ods, .odp, ...) and flat XML
//!   documents are detected automatically
//! - **Lazy parts**: members are read on first access and cached
//! - **Edits**: parts can be added, replaced or deleted before saving
//! - **Compliant output**: `mimetype` first and uncompressed, standard XML
//!   parts next, manifest last
//! - **Templates**: new documents from template packages or built-in types
//!
//! # Example - Editing a document
//!
//! ```no_run
//! use litchi_odf::{Container, SaveOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut container = Container::open("document.odt")?;
//! println!("MIME type: {}", container.mimetype()?);
//!
//! let content = container.get_part("content.xml")?;
//! println!("content.xml: {} bytes", content.len());
//!
//! container.set_part("Pictures/chart.png", std::fs::read("chart.png")?);
//! container.save_to_path("edited.odt", SaveOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - New document from a template
//!
//! ```
//! use litchi_odf::odf::new_container_from_type;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut container = new_container_from_type("presentation")?;
//! assert!(!container.is_template());
//!
//! let mut out = Vec::new();
//! container.save_to_writer(&mut out, Default::default())?;
//! assert_eq!(&out[..4], b"PK\x03\x04");
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! A [`Container`] is meant for use from one thread at a time. Clone it to
//! get an independent copy that shares the original package bytes.

/// Shared error types and format detection
pub mod common;

/// OpenDocument package container
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use odf::{
    Compression, Container, Manifest, OdfFormat, PackageWriter, Packaging, SaveOptions,
};

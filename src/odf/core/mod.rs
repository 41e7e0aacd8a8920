//! Core ODF package functionality.
//!
//! This module provides the container that sits between raw package bytes
//! and the document layers above it. It handles both physical encodings of
//! an OpenDocument file behind one API.
//!
//! # Components
//!
//! - [`Container`] - open, read, edit and save a package
//! - [`PartSource`] - uncached reads from the original package
//!   ([`ZipSource`] for ZIP packages, [`FlatSource`] for flat XML)
//! - [`PartStore`] - cached and pending part state
//! - [`PackageWriter`] - ODF-ordered ZIP output
//! - [`Manifest`] - editable view of `META-INF/manifest.xml`
//!
//! # References
//! - OpenDocument v1.2, Part 3: Packages
//! - ZIP format: PKZIP Application Note

/// The package container
mod container;
/// ODF manifest handling
mod manifest;
/// Package encodings and save options
mod packaging;
/// Read-only part sources
mod source;
/// Pending part state
mod store;
/// ODF package writing
mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use container::Container;
pub use manifest::{Manifest, ManifestEntry, ROOT_PATH};
pub use packaging::{Compression, Packaging, SaveOptions};
pub use source::{FlatSource, PartSource, ZipSource};
pub use store::{PartState, PartStore};
pub use writer::{PackageWriter, write_package};

//! ODF package writing functionality.
//!
//! This module lays out ZIP packages the way ODF consumers expect them:
//! `mimetype` first and uncompressed, the four standard XML parts next, any
//! other member after them, and the manifest last.

use super::packaging::{Compression, Packaging};
use super::store::{PartState, PartStore};
use crate::common::{Error, Result};
use crate::odf::constants::{ODF_MANIFEST, ODF_MIMETYPE, ODF_XML_PARTS};
use std::io::{Cursor, Seek, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::{CompressionMethod, DateTime};

/// Low-level writer for ODF ZIP packages.
///
/// Members are written in call order; [`write_package`] takes care of the
/// ordering rules.
///
/// # Examples
///
/// ```
/// use litchi_odf::{Compression, PackageWriter};
///
/// let mut writer = PackageWriter::new(Compression::Deflated);
/// writer.add_stored("mimetype", b"application/vnd.oasis.opendocument.text")?;
/// writer.add_file("content.xml", b"<office:document-content/>")?;
/// let bytes = writer.finish_to_bytes()?;
/// assert_eq!(&bytes[30..38], b"mimetype");
/// # Ok::<(), litchi_odf::Error>(())
/// ```
pub struct PackageWriter<W: Write + Seek> {
    zip_writer: ZipWriter<W>,
    method: CompressionMethod,
    members: usize,
}

impl PackageWriter<Cursor<Vec<u8>>> {
    /// Create a new package writer that writes to memory
    pub fn new(compression: Compression) -> Self {
        Self::with_writer(Cursor::new(Vec::new()), compression)
    }

    /// Finish writing and return the bytes
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.finish()?;
        Ok(cursor.into_inner())
    }
}

impl<W: Write + Seek> PackageWriter<W> {
    /// Create a new package writer with a custom writer
    pub fn with_writer(writer: W, compression: Compression) -> Self {
        Self {
            zip_writer: ZipWriter::new(writer),
            method: compression.member_method(),
            members: 0,
        }
    }

    /// Add a member without compression, whatever the writer's compression.
    pub fn add_stored(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let options = member_options(CompressionMethod::Stored);
        self.zip_writer.start_file(path, options)?;
        self.zip_writer.write_all(content)?;
        self.members += 1;
        Ok(())
    }

    /// Add a member with the writer's compression.
    ///
    /// Paths ending in `/` become directory entries and `content` is
    /// ignored for them.
    pub fn add_file(&mut self, path: &str, content: &[u8]) -> Result<()> {
        let options = member_options(self.method);
        if path.ends_with('/') {
            if !content.is_empty() {
                tracing::warn!(path, size = content.len(), "dropping content of directory entry");
            }
            self.zip_writer.add_directory(path, options)?;
        } else {
            self.zip_writer.start_file(path, options)?;
            self.zip_writer.write_all(content)?;
        }
        self.members += 1;
        Ok(())
    }

    /// Number of members written so far.
    pub fn member_count(&self) -> usize {
        self.members
    }

    /// Write the central directory and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        let writer = self.zip_writer.finish()?;
        Ok(writer)
    }
}

// Fixed timestamp keeps output byte-for-byte reproducible
fn member_options(method: CompressionMethod) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(method)
        .last_modified_time(DateTime::default())
}

/// Serialize the present parts of `parts` with the given packaging.
///
/// Every part the output should contain must already be present in the
/// store; unresolved source members are not consulted here.
pub fn write_package(
    parts: &PartStore,
    packaging: Packaging,
    compression: Compression,
) -> Result<Vec<u8>> {
    match packaging {
        Packaging::Zip => write_zip(parts, compression),
        Packaging::Flat => Err(Error::Unsupported("saving as a flat ODF document".to_string())),
    }
}

fn write_zip(parts: &PartStore, compression: Compression) -> Result<Vec<u8>> {
    let mut writer = PackageWriter::new(compression);

    let mimetype = match parts.get(ODF_MIMETYPE) {
        Some(PartState::Present(data)) => data,
        Some(PartState::Deleted) => return Err(Error::PartDeleted(ODF_MIMETYPE.to_string())),
        None => return Err(Error::PartNotFound(ODF_MIMETYPE.to_string())),
    };
    writer.add_stored(ODF_MIMETYPE, mimetype)?;

    for part in ODF_XML_PARTS {
        if let Some(PartState::Present(data)) = parts.get(part.path()) {
            writer.add_file(part.path(), data)?;
        }
    }

    for (path, data) in parts.present() {
        let reserved = path == ODF_MIMETYPE
            || path == ODF_MANIFEST
            || ODF_XML_PARTS.iter().any(|part| part.path() == path);
        if reserved {
            continue;
        }
        writer.add_file(path, data)?;
    }

    if let Some(PartState::Present(manifest)) = parts.get(ODF_MANIFEST) {
        writer.add_file(ODF_MANIFEST, manifest)?;
    }

    tracing::debug!(members = writer.member_count(), "wrote ZIP package");
    writer.finish_to_bytes()
}

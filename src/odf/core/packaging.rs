//! Package encodings and per-save configuration.

use crate::common::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Physical encoding of an ODF package.
///
/// Fixed when a container is opened; it is also the default encoding used
/// when the container is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packaging {
    /// ZIP archive of XML and media members (.odt, .ods, ...)
    Zip,
    /// Single XML document embedding the standard parts (.fodt, ...)
    Flat,
}

impl Packaging {
    pub const fn as_str(self) -> &'static str {
        match self {
            Packaging::Zip => "zip",
            Packaging::Flat => "flat",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Packaging {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zip" => Ok(Packaging::Zip),
            "flat" => Ok(Packaging::Flat),
            other => Err(Error::UnsupportedPackagingMode(other.to_string())),
        }
    }
}

/// Compression applied to every ZIP member except `mimetype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Deflate, falling back to stored when the `deflate` feature is off
    #[default]
    Deflated,
    /// No compression
    Stored,
}

impl Compression {
    /// ZIP method actually used for non-mimetype members.
    pub(crate) fn member_method(self) -> zip::CompressionMethod {
        match self {
            #[cfg(feature = "deflate")]
            Compression::Deflated => zip::CompressionMethod::Deflated,
            #[cfg(not(feature = "deflate"))]
            Compression::Deflated => {
                tracing::warn!("deflate backend not compiled in, storing members uncompressed");
                zip::CompressionMethod::Stored
            }
            Compression::Stored => zip::CompressionMethod::Stored,
        }
    }
}

/// Options for [`Container::save_with`](super::Container::save_with) and friends.
///
/// # Examples
///
/// ```
/// use litchi_odf::{Compression, Packaging, SaveOptions};
///
/// let options = SaveOptions::new()
///     .packaging(Packaging::Zip)
///     .compression(Compression::Stored);
/// assert_eq!(options.packaging_or(Packaging::Flat), Packaging::Zip);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    packaging: Option<Packaging>,
    compression: Compression,
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the container's own packaging.
    pub fn packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Requested packaging, or `default` when none was set.
    pub fn packaging_or(&self, default: Packaging) -> Packaging {
        self.packaging.unwrap_or(default)
    }

    pub fn compression_method(&self) -> Compression {
        self.compression
    }
}

//! OpenDocument Format (ODF) packages.
//!
//! ODF documents are stored either as ZIP archives (.odt, .ods, .odp, ...)
//! or as single flat XML files (.fodt, ...). [`Container`] reads both,
//! caches the parts it has loaded, records edits, and writes packages back
//! out in the layout ODF consumers expect.
//!
//! # Example
//!
//! ```no_run
//! use litchi_odf::odf::{Container, SaveOptions};
//!
//! # fn main() -> litchi_odf::Result<()> {
//! let mut container = Container::open("document.odt")?;
//! for name in container.list_parts()? {
//!     println!("{}", name);
//! }
//! container.delete_part("Thumbnails/thumbnail.png");
//! container.save_to_path("copy.odt", SaveOptions::default())?;
//! # Ok(())
//! # }
//! ```

/// ODF constants and MIME types
pub mod constants;
/// Core package container
mod core;
/// New documents from templates
mod template;

/// Re-export the main APIs
pub use self::core::{
    Compression, Container, FlatSource, Manifest, ManifestEntry, PackageWriter, Packaging,
    PartSource, PartState, PartStore, ROOT_PATH, SaveOptions, ZipSource, write_package,
};
pub use template::{
    build_template, from_template, new_container, new_container_from_reader,
    new_container_from_type,
};

#[cfg(test)]
pub(crate) use self::core::test_support;

/// ODF format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdfFormat {
    /// OpenDocument Text (.odt)
    Text,
    /// OpenDocument Spreadsheet (.ods)
    Spreadsheet,
    /// OpenDocument Presentation (.odp)
    Presentation,
    /// OpenDocument Drawing (.odg)
    Drawing,
    /// OpenDocument Formula (.odf)
    Formula,
    /// OpenDocument Chart (.odc)
    Chart,
    /// OpenDocument Image (.odi)
    Image,
    /// OpenDocument Master (.odm)
    Master,
    /// OpenDocument Web (.oth)
    Web,
}

/// MIME types for different ODF formats
pub const ODF_MIME_TYPES: &[(&str, OdfFormat)] = &[
    ("application/vnd.oasis.opendocument.text", OdfFormat::Text),
    ("application/vnd.oasis.opendocument.spreadsheet", OdfFormat::Spreadsheet),
    ("application/vnd.oasis.opendocument.presentation", OdfFormat::Presentation),
    ("application/vnd.oasis.opendocument.graphics", OdfFormat::Drawing),
    ("application/vnd.oasis.opendocument.formula", OdfFormat::Formula),
    ("application/vnd.oasis.opendocument.chart", OdfFormat::Chart),
    ("application/vnd.oasis.opendocument.image", OdfFormat::Image),
    ("application/vnd.oasis.opendocument.text-master", OdfFormat::Master),
    ("application/vnd.oasis.opendocument.text-web", OdfFormat::Web),
    // Template variants
    ("application/vnd.oasis.opendocument.text-template", OdfFormat::Text),
    ("application/vnd.oasis.opendocument.spreadsheet-template", OdfFormat::Spreadsheet),
    ("application/vnd.oasis.opendocument.presentation-template", OdfFormat::Presentation),
    ("application/vnd.oasis.opendocument.graphics-template", OdfFormat::Drawing),
    ("application/vnd.oasis.opendocument.formula-template", OdfFormat::Formula),
    ("application/vnd.oasis.opendocument.chart-template", OdfFormat::Chart),
    ("application/vnd.oasis.opendocument.image-template", OdfFormat::Image),
];

/// Detect ODF format from MIME type
pub fn detect_format_from_mime(mime_type: &str) -> Option<OdfFormat> {
    ODF_MIME_TYPES
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .map(|(_, format)| *format)
}

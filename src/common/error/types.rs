//! Unified error types for the ODF container.
//!
//! Package-level failures are kept distinct so callers can tell a corrupt
//! archive from an unknown document type, and a part that never existed from
//! one that was removed on purpose.
use thiserror::Error;

/// Main error type for container operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory-based (uncompressed) OpenDocument
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The bytes carry the ZIP signature but are not a readable archive
    #[error("Corrupted or not an OpenDocument archive: {0}")]
    CorruptArchive(String),

    /// The mimetype is not one of the OpenDocument types
    #[error("Document of unknown type \"{0}\"")]
    UnknownDocumentType(String),

    /// Neither a ZIP package nor a recognizable flat XML document
    #[error("Bad OpenDocument format: {0}")]
    MalformedPackage(String),

    /// Part absent from both the source and the pending changes
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Part explicitly marked for deletion
    #[error("Part \"{0}\" is deleted")]
    PartDeleted(String),

    /// Flat XML documents only carry the four standard XML parts
    #[error("Third-party parts are not supported in an XML-only ODF document: {0}")]
    UnsupportedPart(String),

    /// Save requested with a packaging other than `zip` or `flat`
    #[error("Packaging type \"{0}\" not supported")]
    UnsupportedPackagingMode(String),

    /// Template type name with no built-in template
    #[error("Unknown template type: {0}")]
    UnknownTemplate(String),

    /// Save without a target on a container that has no path
    #[error("No target given and the container has no path")]
    MissingTarget,

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Unsupported feature
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, Error>;

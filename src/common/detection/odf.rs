//! ODF (OpenDocument Format) package detection.
//!
//! Decides between the ZIP and flat XML encodings and extracts the MIME
//! type. A byte stream that starts with the ZIP signature is only ever
//! treated as a ZIP package: if it cannot be parsed it is reported as
//! corrupt rather than retried as XML.

use super::utils::has_zip_signature;
use crate::common::{Error, Result};
use crate::odf::constants::{ODF_MIMETYPE, is_odf_mime_type};
use crate::odf::{FlatSource, OdfFormat, PartSource, ZipSource, detect_format_from_mime};
use bytes::Bytes;

/// Outcome of package detection.
#[derive(Debug)]
pub struct DetectedPackage {
    /// Source matching the detected encoding, ready for part reads
    pub source: Box<dyn PartSource>,
    /// Validated MIME type
    pub mimetype: String,
}

/// Detect the encoding of `data` and validate its MIME type.
pub fn detect_package(data: &Bytes) -> Result<DetectedPackage> {
    let (source, mimetype): (Box<dyn PartSource>, Bytes) = if has_zip_signature(data) {
        let source = ZipSource::new(data.clone());
        let mimetype = source.read(ODF_MIMETYPE).map_err(|e| match e {
            Error::PartNotFound(_) => {
                Error::MalformedPackage("ZIP package has no mimetype member".to_string())
            }
            other => other,
        })?;
        (Box::new(source), mimetype)
    } else {
        let source = FlatSource::new(data.clone());
        let mimetype = source.mimetype().ok_or_else(|| {
            Error::MalformedPackage("neither a ZIP package nor a flat ODF document".to_string())
        })?;
        (Box::new(source), mimetype)
    };

    let mimetype = match std::str::from_utf8(&mimetype) {
        Ok(value) if is_odf_mime_type(value) => value.to_string(),
        _ => {
            return Err(Error::UnknownDocumentType(
                String::from_utf8_lossy(&mimetype).into_owned(),
            ));
        }
    };

    tracing::trace!(packaging = %source.packaging(), %mimetype, "package detected");
    Ok(DetectedPackage { source, mimetype })
}

/// Detect the ODF document family of a package.
///
/// Returns `None` for anything that is not a valid ODF package.
pub fn detect_odf_format(bytes: &[u8]) -> Option<OdfFormat> {
    let detected = detect_package(&Bytes::copy_from_slice(bytes)).ok()?;
    detect_format_from_mime(&detected.mimetype)
}

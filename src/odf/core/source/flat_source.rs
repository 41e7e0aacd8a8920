//! Parts of a flat (single XML document) ODF file.
//!
//! A flat document embeds the standard parts as `office:document-*`
//! fragments and carries its MIME type in an `office:mimetype` attribute.
//! Only those five parts can be addressed; there is no member directory to
//! list.

use super::PartSource;
use crate::common::{Error, Result};
use crate::odf::constants::{ODF_MIMETYPE, XmlPart};
use crate::odf::core::Packaging;
use bytes::Bytes;
use memchr::memmem;

const MIMETYPE_ATTR: &[u8] = b"office:mimetype=\"";

/// Tag and attribute scanner over a flat ODF document.
#[derive(Debug, Clone)]
pub struct FlatSource {
    data: Bytes,
}

impl FlatSource {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Value of the first `office:mimetype` attribute.
    pub fn mimetype(&self) -> Option<Bytes> {
        let start = memmem::find(&self.data, MIMETYPE_ATTR)? + MIMETYPE_ATTR.len();
        let len = memchr::memchr(b'"', &self.data[start..])?;
        Some(self.data.slice(start..start + len))
    }

    /// The `office:document-NAME` element of one of the XML parts, tags included.
    pub fn xml_part(&self, part: XmlPart) -> Option<Bytes> {
        let open = format!("<office:document-{}", part.name());
        let close = format!("</office:document-{}>", part.name());

        // Skip longer names sharing the prefix
        let start = memmem::find_iter(&self.data, open.as_bytes()).find(|&pos| {
            matches!(
                self.data.get(pos + open.len()),
                Some(b'>' | b' ' | b'\t' | b'\r' | b'\n')
            )
        })?;
        let end = start + memmem::find(&self.data[start..], close.as_bytes())? + close.len();
        Some(self.data.slice(start..end))
    }
}

impl PartSource for FlatSource {
    fn packaging(&self) -> Packaging {
        Packaging::Flat
    }

    fn list(&self) -> Result<Vec<String>> {
        Err(Error::Unsupported("listing the parts of a flat ODF document".to_string()))
    }

    fn read(&self, path: &str) -> Result<Bytes> {
        let part = if path == ODF_MIMETYPE {
            self.mimetype()
        } else {
            let part =
                XmlPart::from_name(path).ok_or_else(|| Error::UnsupportedPart(path.to_string()))?;
            self.xml_part(part)
        };
        part.ok_or_else(|| Error::PartNotFound(path.to_string()))
    }

    fn detached(&self) -> Box<dyn PartSource> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::constants::ODF_TEXT;
    use crate::odf::core::test_support::sample_flat;

    #[test]
    fn test_mimetype_attribute() {
        let source = FlatSource::new(sample_flat());
        assert_eq!(&source.read("mimetype").unwrap()[..], ODF_TEXT.as_bytes());
    }

    #[test]
    fn test_xml_parts_by_short_name_and_path() {
        let source = FlatSource::new(sample_flat());
        let meta = source.read("meta").unwrap();
        assert!(meta.starts_with(b"<office:document-meta>"));
        assert!(meta.ends_with(b"</office:document-meta>"));
        assert_eq!(source.read("meta.xml").unwrap(), meta);

        let content = source.read("content").unwrap();
        assert!(content.starts_with(b"<office:document-content office:version"));
        assert!(content.ends_with(b"</office:document-content>"));
    }

    #[test]
    fn test_third_party_part_is_unsupported() {
        let source = FlatSource::new(sample_flat());
        assert!(matches!(source.read("Pictures/a.jpg"), Err(Error::UnsupportedPart(_))));
        assert!(matches!(
            source.read("META-INF/manifest.xml"),
            Err(Error::UnsupportedPart(_))
        ));
    }

    #[test]
    fn test_missing_xml_part() {
        let source = FlatSource::new(Bytes::from_static(
            b"<office:document office:mimetype=\"x\"><office:document-meta></office:document-meta></office:document>",
        ));
        assert!(matches!(source.read("styles"), Err(Error::PartNotFound(_))));
        assert!(source.read("meta").is_ok());
    }

    #[test]
    fn test_prefix_collision_is_skipped() {
        let source = FlatSource::new(Bytes::from_static(
            b"<office:document-metadata/><office:document-meta>m</office:document-meta>",
        ));
        assert_eq!(
            &source.read("meta").unwrap()[..],
            b"<office:document-meta>m</office:document-meta>"
        );
    }

    #[test]
    fn test_list_is_unsupported() {
        let source = FlatSource::new(sample_flat());
        assert!(matches!(source.list(), Err(Error::Unsupported(_))));
    }
}

//! Package fixtures shared by the unit tests.

use crate::odf::constants::ODF_TEXT;
use bytes::Bytes;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// ZIP package with the given members, in order, all stored.
pub(crate) fn zip_package(entries: &[(&str, &[u8])]) -> Bytes {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
    }
    Bytes::from(writer.finish().unwrap().into_inner())
}

/// Copy of `package` with the first byte of `payload` flipped.
///
/// The stored CRC no longer matches, so the member only fails once it is read.
pub(crate) fn corrupt_payload(package: &[u8], payload: &[u8]) -> Bytes {
    let mut raw = package.to_vec();
    let at = memchr::memmem::find(&raw, payload).unwrap();
    raw[at] ^= 0x20;
    Bytes::from(raw)
}

const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2">
 <manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.text"/>
 <manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/>
 <manifest:file-entry manifest:full-path="Pictures/a.png" manifest:media-type="image/png"/>
</manifest:manifest>
"#;

/// Text document whose members are deliberately out of canonical order.
pub(crate) fn sample_odt() -> Bytes {
    zip_package(&[
        ("mimetype", ODF_TEXT.as_bytes()),
        ("META-INF/manifest.xml", MANIFEST.as_bytes()),
        ("content.xml", b"<?xml version=\"1.0\"?><office:document-content office:version=\"1.2\"><office:body/></office:document-content>"),
        ("styles.xml", b"<office:document-styles/>"),
        ("meta.xml", b"<office:document-meta/>"),
        ("settings.xml", b"<office:document-settings/>"),
        ("Pictures/", b""),
        ("Pictures/a.png", b"\x89PNG fake"),
        ("Thumbnails/thumbnail.png", b"\x89PNG thumb"),
    ])
}

/// Flat text document carrying the four standard XML parts.
pub(crate) fn sample_flat() -> Bytes {
    Bytes::from(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" office:version="1.2" office:mimetype="{ODF_TEXT}">
<office:document-meta><office:meta/></office:document-meta>
<office:document-settings><office:settings/></office:document-settings>
<office:document-styles><office:styles/></office:document-styles>
<office:document-content office:version="1.2"><office:body><office:text/></office:body></office:document-content>
</office:document>
"#
    ))
}

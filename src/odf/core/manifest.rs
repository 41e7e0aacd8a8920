//! ODF manifest handling.
//!
//! The manifest (`META-INF/manifest.xml`) records the media type of every
//! part of a package. Containers treat it as opaque bytes; this type is for
//! workflows that need to edit it, such as creating a document from a
//! template.

use super::Container;
use crate::common::{Error, Result};
use crate::odf::constants::ODF_MANIFEST;
use quick_xml::Reader;
use quick_xml::escape::{escape, unescape};
use quick_xml::events::{BytesStart, Event};

const MANIFEST_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Path of the entry describing the package itself
pub const ROOT_PATH: &str = "/";

/// ODF manifest (META-INF/manifest.xml)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    root_attributes: Vec<(String, String)>,
    entries: Vec<ManifestEntry>,
}

/// Entry in the ODF manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub full_path: String,
    pub media_type: String,
    /// Remaining attributes (`manifest:version`, `manifest:size`, ...), in document order
    pub attributes: Vec<(String, String)>,
}

impl Manifest {
    /// Empty manifest with a root entry for `mimetype`.
    pub fn new(mimetype: &str) -> Self {
        let mut manifest = Self {
            root_attributes: vec![
                ("xmlns:manifest".to_string(), MANIFEST_NS.to_string()),
                ("manifest:version".to_string(), "1.2".to_string()),
            ],
            entries: Vec::new(),
        };
        manifest.set_media_type(ROOT_PATH, mimetype);
        manifest
    }

    /// Read and parse the manifest part of a container.
    pub fn from_container(container: &mut Container) -> Result<Self> {
        let data = container.get_part(ODF_MANIFEST)?;
        Self::from_bytes(&data)
    }

    /// Parse manifest XML content
    pub fn from_bytes(xml_content: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml_content);
        let mut buf = Vec::new();

        let mut root_attributes = None;
        let mut entries = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                    b"manifest:manifest" => root_attributes = Some(Self::parse_attributes(e)?),
                    b"manifest:file-entry" => {
                        if let Some(entry) = Self::parse_file_entry(e)? {
                            entries.push(entry);
                        }
                    }
                    _ => {},
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlError(format!("manifest: {}", e))),
                _ => {},
            }
            buf.clear();
        }

        let root_attributes = root_attributes
            .ok_or_else(|| Error::XmlError("manifest: no manifest:manifest element".to_string()))?;
        Ok(Self { root_attributes, entries })
    }

    fn parse_attributes(e: &BytesStart) -> Result<Vec<(String, String)>> {
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8(attr.key.as_ref().to_vec())
                .map_err(|_| Error::XmlError("Invalid UTF-8 in manifest".to_string()))?;
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|_| Error::XmlError("Invalid UTF-8 in manifest".to_string()))?;
            let value = unescape(raw).map_err(|e| Error::XmlError(e.to_string()))?;
            attributes.push((key, value.into_owned()));
        }
        Ok(attributes)
    }

    /// Parse a single file-entry element
    fn parse_file_entry(e: &BytesStart) -> Result<Option<ManifestEntry>> {
        let mut full_path = None;
        let mut media_type = String::new();
        let mut attributes = Vec::new();

        for (key, value) in Self::parse_attributes(e)? {
            match key.as_str() {
                "manifest:full-path" => full_path = Some(value),
                "manifest:media-type" => media_type = value,
                _ => attributes.push((key, value)),
            }
        }

        Ok(full_path.map(|full_path| ManifestEntry {
            full_path,
            media_type,
            attributes,
        }))
    }

    /// Get media type for a path
    pub fn get_media_type(&self, path: &str) -> Option<&str> {
        self.get_entry(path).map(|entry| entry.media_type.as_str())
    }

    /// Set the media type of a path, adding an entry if needed.
    pub fn set_media_type(&mut self, path: &str, media_type: &str) {
        match self.entries.iter_mut().find(|entry| entry.full_path == path) {
            Some(entry) => entry.media_type = media_type.to_string(),
            None => self.entries.push(ManifestEntry {
                full_path: path.to_string(),
                media_type: media_type.to_string(),
                attributes: Vec::new(),
            }),
        }
    }

    /// Drop the entry for a path. Returns whether it existed.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.full_path != path);
        self.entries.len() != before
    }

    /// Get entry for a path
    pub fn get_entry(&self, path: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|entry| entry.full_path == path)
    }

    /// Get all paths in manifest, in document order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.full_path.as_str())
    }

    /// Serialize back to XML.
    pub fn serialize(&self) -> Vec<u8> {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str("<manifest:manifest");
        for (key, value) in &self.root_attributes {
            push_attribute(&mut xml, key, value);
        }
        xml.push_str(">\n");

        for entry in &self.entries {
            xml.push_str(" <manifest:file-entry");
            push_attribute(&mut xml, "manifest:full-path", &entry.full_path);
            for (key, value) in &entry.attributes {
                push_attribute(&mut xml, key, value);
            }
            push_attribute(&mut xml, "manifest:media-type", &entry.media_type);
            xml.push_str("/>\n");
        }

        xml.push_str("</manifest:manifest>\n");
        xml.into_bytes()
    }
}

fn push_attribute(xml: &mut String, key: &str, value: &str) {
    xml.push(' ');
    xml.push_str(key);
    xml.push_str("=\"");
    xml.push_str(&escape(value));
    xml.push('"');
}

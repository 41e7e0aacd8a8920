//! The ODF container: lazy part access, pending edits and saving.

use super::packaging::{Packaging, SaveOptions};
use super::source::PartSource;
use super::store::{PartState, PartStore};
use super::writer::write_package;
use crate::common::detection::odf::detect_package;
use crate::common::{Error, Result};
use crate::odf::constants::{ODF_MIMETYPE, is_template_mime_type};
use crate::odf::{OdfFormat, detect_format_from_mime};
use bytes::Bytes;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// An ODF package held in memory.
///
/// The original bytes are kept for the container's whole life. Parts are
/// read from them on first access and cached; [`set_part`](Self::set_part)
/// and [`delete_part`](Self::delete_part) only record pending changes,
/// which [`save`](Self::save) writes out together with every untouched
/// member of the original package.
///
/// A container is not meant to be shared between threads. Use
/// [`Clone`] to get an independent copy instead.
///
/// # Examples
///
/// ```no_run
/// use litchi_odf::Container;
///
/// # fn main() -> litchi_odf::Result<()> {
/// let mut container = Container::open("report.odt")?;
/// let content = container.get_part("content.xml")?;
/// container.set_part("Pictures/logo.png", std::fs::read("logo.png")?);
/// container.delete_part("Thumbnails/thumbnail.png");
/// container.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Container {
    path: Option<PathBuf>,
    data: Bytes,
    packaging: Packaging,
    source: Box<dyn PartSource>,
    parts: PartStore,
}

impl Container {
    /// Open the package stored at `path`.
    ///
    /// The path is remembered as the default save target.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::UnsupportedEncoding(format!(
                "reading uncompressed OpenDocument not supported: {}",
                path.display()
            )));
        }
        let data = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), "opening ODF package");
        Self::load(Bytes::from(data), Some(path.to_path_buf()))
    }

    /// Read a whole package from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load(Bytes::from(data), None)
    }

    /// Use `data` as the package bytes.
    pub fn from_bytes(data: impl Into<Bytes>) -> Result<Self> {
        Self::load(data.into(), None)
    }

    fn load(data: Bytes, path: Option<PathBuf>) -> Result<Self> {
        let detected = detect_package(&data)?;
        let packaging = detected.source.packaging();
        tracing::debug!(%packaging, mimetype = %detected.mimetype, "detected ODF package");

        let mut parts = PartStore::new();
        parts.set(ODF_MIMETYPE, Bytes::from(detected.mimetype));
        Ok(Self {
            path,
            data,
            packaging,
            source: detected.source,
            parts,
        })
    }

    /// Default save target, if the container was opened from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Encoding detected when the package was opened.
    pub fn packaging(&self) -> Packaging {
        self.packaging
    }

    /// The original package bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Current value of the `mimetype` part.
    pub fn mimetype(&self) -> Result<&str> {
        match self.parts.get(ODF_MIMETYPE) {
            Some(PartState::Present(data)) => std::str::from_utf8(data).map_err(|_| {
                Error::UnknownDocumentType(String::from_utf8_lossy(data).into_owned())
            }),
            Some(PartState::Deleted) => Err(Error::PartDeleted(ODF_MIMETYPE.to_string())),
            None => Err(Error::PartNotFound(ODF_MIMETYPE.to_string())),
        }
    }

    /// Document family of the current MIME type.
    pub fn format(&self) -> Option<OdfFormat> {
        self.mimetype().ok().and_then(detect_format_from_mime)
    }

    /// Whether the current MIME type is a template type.
    pub fn is_template(&self) -> bool {
        self.mimetype().is_ok_and(is_template_mime_type)
    }

    /// Names of the members of the original package.
    ///
    /// Pending additions and deletions are not reflected. Flat documents
    /// cannot be listed.
    pub fn list_parts(&self) -> Result<Vec<String>> {
        self.source.list()
    }

    /// Bytes of a part, loading and caching it on first access.
    pub fn get_part(&mut self, path: &str) -> Result<Bytes> {
        self.parts.resolve(path, self.source.as_ref())
    }

    /// Add a part or replace its content.
    ///
    /// A path ending in `/` is saved as a directory entry; any content
    /// given for it is dropped on save.
    pub fn set_part(&mut self, path: impl Into<String>, data: impl Into<Bytes>) {
        self.parts.set(path, data.into());
    }

    /// Mark a part for deletion.
    pub fn delete_part(&mut self, path: impl Into<String>) {
        self.parts.delete(path);
    }

    /// Save to the path the container was opened from.
    pub fn save(&mut self) -> Result<()> {
        self.save_with(SaveOptions::default())
    }

    /// Save to the path the container was opened from, with options.
    pub fn save_with(&mut self, options: SaveOptions) -> Result<()> {
        let path = self.path.clone().ok_or(Error::MissingTarget)?;
        self.save_to_path(path, options)
    }

    /// Save to `path`, replacing any existing file.
    ///
    /// The package is fully serialized before the file is touched, so a
    /// failed save leaves an existing file intact.
    pub fn save_to_path<P: AsRef<Path>>(&mut self, path: P, options: SaveOptions) -> Result<()> {
        let bytes = self.to_bytes(options)?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }

    /// Save into `writer`. The writer is flushed but stays open.
    pub fn save_to_writer<W: Write>(&mut self, writer: &mut W, options: SaveOptions) -> Result<()> {
        let bytes = self.to_bytes(options)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize the package to a new buffer.
    pub fn to_bytes(&mut self, options: SaveOptions) -> Result<Vec<u8>> {
        let packaging = options.packaging_or(self.packaging);
        self.resolve_all()?;
        tracing::debug!(%packaging, parts = self.parts.len(), "serializing ODF package");
        write_package(&self.parts, packaging, options.compression_method())
    }

    // Untouched members must be loaded, the writer only sees the store
    fn resolve_all(&mut self) -> Result<()> {
        for path in self.source.list()? {
            if !self.parts.contains(&path) {
                self.parts.resolve(&path, self.source.as_ref())?;
            }
        }
        Ok(())
    }
}

impl Clone for Container {
    /// Copy with the same bytes and pending changes but no path.
    ///
    /// The package buffer is shared; the clone opens its own archive on
    /// demand and its edits never reach the original.
    fn clone(&self) -> Self {
        Self {
            path: None,
            data: self.data.clone(),
            packaging: self.packaging,
            source: self.source.detached(),
            parts: self.parts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::constants::{ODF_CONTENT, ODF_MANIFEST, ODF_MIMETYPES, ODF_TEXT};
    use crate::odf::core::packaging::Compression;
    use crate::odf::core::test_support::{corrupt_payload, sample_flat, sample_odt, zip_package};
    use proptest::prelude::*;
    use std::io::Cursor;
    use zip::ZipArchive;

    fn member_names(bytes: &[u8]) -> Vec<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_zip_container() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        assert_eq!(container.packaging(), Packaging::Zip);
        assert_eq!(container.mimetype().unwrap(), ODF_TEXT);
        assert_eq!(container.format(), Some(OdfFormat::Text));
        assert!(!container.is_template());
        assert_eq!(&container.get_part(ODF_MIMETYPE).unwrap()[..], ODF_TEXT.as_bytes());

        let content = container.get_part(ODF_CONTENT).unwrap();
        assert!(memchr::memmem::find(&content, b"<office:document-content").is_some());
    }

    #[test]
    fn test_flat_container() {
        let mut container = Container::from_bytes(sample_flat()).unwrap();
        assert_eq!(container.packaging(), Packaging::Flat);
        assert_eq!(container.mimetype().unwrap(), ODF_TEXT);
        assert!(container.get_part("meta").unwrap().starts_with(b"<office:document-meta>"));
        assert!(matches!(
            container.get_part("Pictures/a.jpg"),
            Err(Error::UnsupportedPart(_))
        ));
        assert!(matches!(container.list_parts(), Err(Error::Unsupported(_))));
        assert!(matches!(
            container.to_bytes(SaveOptions::default()),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_set_part() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        container.set_part("Pictures/a.jpg", &b"JFIFIThinkImAnImage"[..]);
        assert_eq!(&container.get_part("Pictures/a.jpg").unwrap()[..], b"JFIFIThinkImAnImage");
    }

    #[test]
    fn test_directory_part_saves_without_content() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        container.set_part("Configurations2/", &b"not a file"[..]);
        let bytes = container.to_bytes(SaveOptions::default()).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let entry = archive.by_name("Configurations2/").unwrap();
        assert!(entry.is_dir());
        assert_eq!(entry.size(), 0);
    }

    #[test]
    fn test_delete_part() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        container.delete_part(ODF_CONTENT);
        assert!(matches!(container.get_part(ODF_CONTENT), Err(Error::PartDeleted(_))));
        assert!(matches!(
            container.get_part("never/there.xml"),
            Err(Error::PartNotFound(_))
        ));
    }

    #[test]
    fn test_list_ignores_pending_changes() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        let before = container.list_parts().unwrap();
        container.set_part("extra.bin", vec![1u8, 2, 3]);
        container.delete_part(ODF_CONTENT);
        assert_eq!(container.list_parts().unwrap(), before);
    }

    #[test]
    fn test_round_trip_without_changes() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        let original = container.list_parts().unwrap();
        let bytes = container.to_bytes(SaveOptions::default()).unwrap();

        let names = member_names(&bytes);
        assert_eq!(names.first().map(String::as_str), Some(ODF_MIMETYPE));
        assert_eq!(names.last().map(String::as_str), Some(ODF_MANIFEST));
        let mut sorted_original = original.clone();
        sorted_original.sort();
        let mut sorted_names = names.clone();
        sorted_names.sort();
        assert_eq!(sorted_names, sorted_original);

        let mut reopened = Container::from_bytes(bytes).unwrap();
        assert_eq!(reopened.mimetype().unwrap(), ODF_TEXT);
        assert_eq!(
            reopened.get_part("Pictures/a.png").unwrap(),
            container.get_part("Pictures/a.png").unwrap()
        );
    }

    #[test]
    fn test_saved_changes() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        container.set_part("Pictures/b.jpg", &b"jpeg"[..]);
        container.delete_part("Pictures/a.png");
        container.set_part(ODF_CONTENT, &b"<office:document-content/>"[..]);

        let bytes = container.to_bytes(SaveOptions::default()).unwrap();
        let names = member_names(&bytes);
        assert!(names.contains(&"Pictures/b.jpg".to_string()));
        assert!(!names.contains(&"Pictures/a.png".to_string()));

        let mut reopened = Container::from_bytes(bytes).unwrap();
        assert_eq!(&reopened.get_part(ODF_CONTENT).unwrap()[..], b"<office:document-content/>");
        assert!(matches!(
            reopened.get_part("Pictures/a.png"),
            Err(Error::PartNotFound(_))
        ));
    }

    #[test]
    fn test_save_aborts_on_unreadable_member() {
        let package = zip_package(&[
            ("mimetype", ODF_TEXT.as_bytes()),
            ("broken.bin", b"payload that fails its checksum"),
        ]);
        let data = corrupt_payload(&package, b"payload that fails its checksum");

        let mut container = Container::from_bytes(data.clone()).unwrap();
        let read_error = match container.get_part("broken.bin") {
            Err(Error::CorruptArchive(message)) => message,
            other => panic!("unexpected result: {other:?}"),
        };

        let mut fresh = Container::from_bytes(data).unwrap();
        match fresh.to_bytes(SaveOptions::default()) {
            Err(Error::CorruptArchive(message)) => assert_eq!(message, read_error),
            other => panic!("unexpected result: {other:?}"),
        }

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("kept.odt");
        std::fs::write(&target, b"previous").unwrap();
        assert!(container.save_to_path(&target, SaveOptions::default()).is_err());
        assert_eq!(std::fs::read(&target).unwrap(), b"previous");
    }

    #[test]
    fn test_save_to_path_and_writer() {
        let dir = tempfile::tempdir().unwrap();
        let source_path = dir.path().join("example.odt");
        std::fs::write(&source_path, sample_odt()).unwrap();

        let mut container = Container::open(&source_path).unwrap();
        assert_eq!(container.path(), Some(source_path.as_path()));
        container.set_part("Pictures/new.png", &b"png"[..]);
        container.save().unwrap();

        let mut reopened = Container::open(&source_path).unwrap();
        assert_eq!(&reopened.get_part("Pictures/new.png").unwrap()[..], b"png");

        let mut out = Vec::new();
        reopened
            .save_to_writer(&mut out, SaveOptions::new().compression(Compression::Stored))
            .unwrap();
        assert_eq!(Container::from_bytes(out).unwrap().packaging(), Packaging::Zip);
    }

    #[test]
    fn test_open_directory_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(Container::open(dir.path()), Err(Error::UnsupportedEncoding(_))));
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        match Container::open(dir.path().join("missing.odt")) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_from_reader() {
        let container = Container::from_reader(Cursor::new(sample_odt().to_vec())).unwrap();
        assert_eq!(container.path(), None);
        assert_eq!(container.mimetype().unwrap(), ODF_TEXT);
    }

    #[test]
    fn test_save_without_target() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        assert!(matches!(container.save(), Err(Error::MissingTarget)));
    }

    #[test]
    fn test_zip_to_flat_is_unsupported() {
        let mut container = Container::from_bytes(sample_odt()).unwrap();
        let options = SaveOptions::new().packaging(Packaging::Flat);
        assert!(matches!(container.to_bytes(options), Err(Error::Unsupported(_))));
    }

    #[test]
    fn test_clone_is_independent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.odt");
        std::fs::write(&path, sample_odt()).unwrap();

        let mut original = Container::open(&path).unwrap();
        let original_content = original.get_part(ODF_CONTENT).unwrap();

        let mut clone = original.clone();
        assert_eq!(clone.path(), None);
        assert_eq!(clone.data(), original.data());
        assert_eq!(clone.packaging(), original.packaging());

        clone.set_part(ODF_CONTENT, &b"<changed/>"[..]);
        clone.delete_part("Pictures/a.png");
        clone.set_part(ODF_MIMETYPE, &b"application/vnd.oasis.opendocument.spreadsheet"[..]);

        assert_eq!(original.get_part(ODF_CONTENT).unwrap(), original_content);
        assert!(original.get_part("Pictures/a.png").is_ok());
        assert_eq!(original.mimetype().unwrap(), ODF_TEXT);
        assert_eq!(clone.format(), Some(OdfFormat::Spreadsheet));
        assert_eq!(&clone.get_part(ODF_CONTENT).unwrap()[..], b"<changed/>");
    }

    proptest! {
        #[test]
        fn prop_set_then_get(
            path in "[A-Za-z0-9_./-]{1,24}",
            data in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let mut container = Container::from_bytes(sample_odt()).unwrap();
            container.set_part(path.clone(), data.clone());
            let stored = container.get_part(&path).unwrap();
            prop_assert_eq!(&stored[..], &data[..]);
        }

        #[test]
        fn prop_deleted_member_never_saved(index in 0usize..16) {
            let mut container = Container::from_bytes(sample_odt()).unwrap();
            let names: Vec<String> = container
                .list_parts()
                .unwrap()
                .into_iter()
                .filter(|n| n != ODF_MIMETYPE)
                .collect();
            let victim = names[index % names.len()].clone();
            container.delete_part(victim.clone());
            prop_assert!(matches!(container.get_part(&victim), Err(Error::PartDeleted(_))));

            let bytes = container.to_bytes(SaveOptions::default()).unwrap();
            prop_assert!(!member_names(&bytes).contains(&victim));
        }
    }

    #[test]
    fn test_mimetype_always_known() {
        let container = Container::from_bytes(sample_odt()).unwrap();
        assert!(ODF_MIMETYPES.contains_key(container.mimetype().unwrap()));
    }
}

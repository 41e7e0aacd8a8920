//! Parts of a ZIP-packaged ODF document.

use super::PartSource;
use crate::common::{Error, Result};
use crate::odf::core::Packaging;
use bytes::Bytes;
use std::cell::RefCell;
use std::io::{Cursor, Read};
use zip::ZipArchive;
use zip::result::ZipError;

type Archive = ZipArchive<Cursor<Bytes>>;

/// Lazily opened ZIP archive over the in-memory package.
///
/// The archive is parsed on the first read or listing and then reused.
/// [`detached`](PartSource::detached) copies share the buffer but parse
/// their own archive on demand.
pub struct ZipSource {
    data: Bytes,
    archive: RefCell<Option<Archive>>,
}

impl ZipSource {
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            archive: RefCell::new(None),
        }
    }

    /// Whether the central directory has been parsed yet.
    pub fn is_open(&self) -> bool {
        self.archive.borrow().is_some()
    }

    fn with_archive<T>(&self, f: impl FnOnce(&mut Archive) -> Result<T>) -> Result<T> {
        let mut slot = self.archive.borrow_mut();
        let archive = match slot.take() {
            Some(archive) => archive,
            None => {
                tracing::debug!(size = self.data.len(), "opening ZIP archive");
                ZipArchive::new(Cursor::new(self.data.clone()))
                    .map_err(|e| Error::CorruptArchive(e.to_string()))?
            }
        };
        f(slot.insert(archive))
    }
}

impl PartSource for ZipSource {
    fn packaging(&self) -> Packaging {
        Packaging::Zip
    }

    fn list(&self) -> Result<Vec<String>> {
        self.with_archive(|archive| Ok(archive.file_names().map(str::to_owned).collect()))
    }

    fn read(&self, path: &str) -> Result<Bytes> {
        self.with_archive(|archive| {
            let mut file = archive.by_name(path).map_err(|e| match e {
                ZipError::FileNotFound => Error::PartNotFound(path.to_string()),
                other => Error::CorruptArchive(format!("{path}: {other}")),
            })?;
            let mut content = Vec::with_capacity(file.size() as usize);
            // Checksum mismatches surface here, at the end of the member
            file.read_to_end(&mut content)
                .map_err(|e| Error::CorruptArchive(format!("{path}: {e}")))?;
            tracing::trace!(path, size = content.len(), "read ZIP member");
            Ok(Bytes::from(content))
        })
    }

    fn detached(&self) -> Box<dyn PartSource> {
        Box::new(Self::new(self.data.clone()))
    }
}

impl std::fmt::Debug for ZipSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipSource")
            .field("size", &self.data.len())
            .field("open", &self.is_open())
            .finish()
    }
}

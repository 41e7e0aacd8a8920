//! Read-only access to the parts of the original package.
//!
//! A container picks one [`PartSource`] when it is opened and keeps it for
//! its whole life. Sources never see pending edits; those live in the
//! [`PartStore`](super::PartStore).

mod flat_source;
mod zip_source;

pub use flat_source::FlatSource;
pub use zip_source::ZipSource;

use super::Packaging;
use crate::common::Result;
use bytes::Bytes;

/// Uncached access to the members of an unmodified package.
pub trait PartSource: std::fmt::Debug {
    /// Encoding this source reads.
    fn packaging(&self) -> Packaging;

    /// Every part name present in the original package.
    fn list(&self) -> Result<Vec<String>>;

    /// Bytes of one part. No caching happens at this level.
    fn read(&self, path: &str) -> Result<Bytes>;

    /// A fresh source over the same bytes with no open handles.
    fn detached(&self) -> Box<dyn PartSource>;
}

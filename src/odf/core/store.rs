//! Pending part state layered over a [`PartSource`].

use super::source::PartSource;
use crate::common::{Error, Result};
use bytes::Bytes;
use std::collections::BTreeMap;

/// State of a part the container has touched.
///
/// Parts that were never read or written have no entry at all and are
/// resolved through the source on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartState {
    /// Loaded from the source or set explicitly
    Present(Bytes),
    /// Marked for deletion
    Deleted,
}

/// Path to part state overlay.
///
/// Keys are kept sorted so saved packages are reproducible.
#[derive(Debug, Clone, Default)]
pub struct PartStore {
    parts: BTreeMap<String, PartState>,
}

impl PartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of `path`, reading through `source` only if the path has no state yet.
    pub fn resolve(&mut self, path: &str, source: &dyn PartSource) -> Result<Bytes> {
        if let Some(state) = self.parts.get(path) {
            return match state {
                PartState::Present(data) => Ok(data.clone()),
                PartState::Deleted => Err(Error::PartDeleted(path.to_string())),
            };
        }
        let data = source.read(path)?;
        tracing::trace!(path, size = data.len(), "resolved part");
        self.parts
            .insert(path.to_string(), PartState::Present(data.clone()));
        Ok(data)
    }

    pub fn get(&self, path: &str) -> Option<&PartState> {
        self.parts.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.parts.contains_key(path)
    }

    /// Add or overwrite a part, whatever its previous state.
    pub fn set(&mut self, path: impl Into<String>, data: Bytes) {
        self.parts.insert(path.into(), PartState::Present(data));
    }

    /// Mark a part for deletion, whether or not it was resolved.
    pub fn delete(&mut self, path: impl Into<String>) {
        self.parts.insert(path.into(), PartState::Deleted);
    }

    /// Paths with state, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// Present parts in path order; tombstones are skipped.
    pub fn present(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.parts.iter().filter_map(|(path, state)| match state {
            PartState::Present(data) => Some((path.as_str(), data)),
            PartState::Deleted => None,
        })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

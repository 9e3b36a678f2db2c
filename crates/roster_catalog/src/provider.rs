//! The catalog load interface.
//!
//! Ingestion code (data-dump parsing, fixture files, test builders) hands
//! catalogs to the engine through [`CatalogProvider`]. The engine treats the
//! provider as opaque.

use std::path::{Path, PathBuf};

use roster_foundation::Result;

use crate::catalog::Catalog;

/// Source of complete catalog snapshots.
pub trait CatalogProvider {
    /// Builds a complete catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or violates catalog
    /// invariants.
    fn load_catalog(&self) -> Result<Catalog>;
}

impl<F> CatalogProvider for F
where
    F: Fn() -> Result<Catalog>,
{
    fn load_catalog(&self) -> Result<Catalog> {
        self()
    }
}

/// Provider that always returns the same, already-built catalog.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    catalog: Catalog,
}

impl StaticProvider {
    /// Wraps a catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogProvider for StaticProvider {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

/// Provider that reads a saved snapshot file on every load.
///
/// Files ending in `.json` are read as JSON, anything else as `MessagePack`.
#[derive(Clone, Debug)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Creates a provider for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "serde")]
impl CatalogProvider for FileProvider {
    fn load_catalog(&self) -> Result<Catalog> {
        crate::serialize::load_from_file(&self.path)
    }
}

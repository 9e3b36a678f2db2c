//! Catalog snapshot serialization.
//!
//! Snapshots are stored as a list of [`UnitDraft`]s and rebuilt through
//! [`Catalog::from_drafts`] on load, so a file can never produce a catalog
//! that violates the builder's invariants. JSON is convenient for hand-written
//! fixtures; `MessagePack` is compact for generated dumps.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use roster_foundation::{Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::draft::UnitDraft;

/// On-disk encoding of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Human-editable JSON.
    Json,
    /// Binary `MessagePack`, with named fields.
    MessagePack,
}

impl SnapshotFormat {
    /// Picks a format from a file extension: `.json` is JSON, anything else
    /// is `MessagePack`.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::MessagePack,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    units: Vec<UnitDraft>,
}

/// Serializes a catalog to bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(catalog: &Catalog, format: SnapshotFormat) -> Result<Vec<u8>> {
    let file = CatalogFile {
        units: catalog.to_drafts(),
    };
    match format {
        SnapshotFormat::Json => serde_json::to_vec_pretty(&file)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
        SnapshotFormat::MessagePack => rmp_serde::to_vec_named(&file)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
    }
}

/// Deserializes a catalog from bytes.
///
/// # Errors
///
/// Returns an error if the bytes cannot be decoded or the decoded units
/// violate catalog invariants.
pub fn from_bytes(bytes: &[u8], format: SnapshotFormat) -> Result<Catalog> {
    let file: CatalogFile = match format {
        SnapshotFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?,
        SnapshotFormat::MessagePack => rmp_serde::from_slice(bytes)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))?,
    };
    Catalog::from_drafts(file.units)
}

/// Saves a catalog, choosing the format from the file extension.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(catalog, SnapshotFormat::from_path(path))?;

    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to write to file '{}': {e}",
            path.display()
        )))
    })?;

    writer.flush().map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to flush file '{}': {e}",
            path.display()
        )))
    })?;

    debug!(path = %path.display(), units = catalog.len(), "saved catalog snapshot");
    Ok(())
}

/// Loads a catalog, choosing the format from the file extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be decoded, or
/// describes an invalid catalog.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    let catalog = from_bytes(&bytes, SnapshotFormat::from_path(path))?;
    debug!(path = %path.display(), units = catalog.len(), "loaded catalog snapshot");
    Ok(catalog)
}

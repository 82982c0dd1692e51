//! Catalog serialization and deserialization using `MessagePack`.
//!
//! A catalog file holds one [`CatalogFile`]: the record domain tag plus the
//! records in catalog order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use folio_foundation::{Error, ErrorKind, Result};
use folio_storage::{Book, Catalog, Movie};
use serde::{Deserialize, Serialize};

use crate::config::Domain;

/// A catalog of either record kind, as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogFile {
    /// A book catalog
    Books(Catalog<Book>),
    /// A movie catalog
    Movies(Catalog<Movie>),
}

impl CatalogFile {
    /// The domain this catalog belongs to.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Books(_) => Domain::Books,
            Self::Movies(_) => Domain::Movies,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Books(catalog) => catalog.len(),
            Self::Movies(catalog) => catalog.len(),
        }
    }

    /// Returns true if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serializes a catalog to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(catalog: &CatalogFile) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(catalog)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes a catalog from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<CatalogFile> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Saves a catalog to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(catalog: &CatalogFile, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_error = |action: &str, e: std::io::Error| {
        Error::new(ErrorKind::IoError(format!(
            "failed to {action} file '{}': {e}",
            path.display()
        )))
    };

    let file = File::create(path).map_err(|e| io_error("create", e))?;
    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(catalog)?;

    writer.write_all(&bytes).map_err(|e| io_error("write to", e))?;
    writer.flush().map_err(|e| io_error("flush", e))?;

    tracing::debug!(path = %path.display(), records = catalog.len(), "catalog saved");
    Ok(())
}

/// Loads a catalog from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
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

    let catalog = from_bytes(&bytes)?;
    tracing::debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

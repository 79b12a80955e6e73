// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::Document;
use crate::line::LineError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Buffer(#[from] LineError),
}

/// Load a file into a document. Any read failure, including a missing
/// file, is an error; startup treats that as fatal for explicitly named
/// files.
///
/// # Errors
/// Returns `StorageError::Read` if the file cannot be read, or
/// `StorageError::Buffer` if line storage cannot be allocated.
pub fn load_document(path: &Path) -> Result<Document, StorageError> {
    let bytes = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(Document::from_bytes(&bytes)?)
}

/// Load the scratch file, or start empty when it does not exist yet.
/// A missing scratch file is a fresh document, not an error.
///
/// # Errors
/// Returns `StorageError` for any failure other than a missing file.
pub fn load_document_or_empty(path: &Path) -> Result<Document, StorageError> {
    match load_document(path) {
        Ok(doc) => Ok(doc),
        Err(StorageError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist yet; starting empty", path.display());
            Ok(Document::new())
        }
        Err(err) => Err(err),
    }
}

/// Serialize the document to `path`, truncating or creating the target.
/// One `\n`-terminated record per line; the file always ends with the
/// final line's terminator. No atomic rename is attempted, so a crash
/// mid-save can truncate the file (known limitation).
///
/// # Errors
/// Returns `StorageError::Write` if the file cannot be written.
pub fn save_document(doc: &Document, path: &Path) -> Result<(), StorageError> {
    let bytes = doc.to_bytes();
    fs::write(path, &bytes).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

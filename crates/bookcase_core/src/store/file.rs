//! File-backed blob store.
//!
//! # Responsibility
//! - Persist blobs across process runs, one file per key under a root
//!   directory.
//!
//! # Invariants
//! - A key that was never written reads back as `None`, same as the
//!   in-memory store.
//! - Writes replace the whole file; there is no locking across processes.

use crate::store::{BlobStore, StoreError, StoreResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each key as `<root>/<key>.blob`.
#[derive(Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    /// - Returns a [`StoreError`] when the root directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError {
            key: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.blob"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::write(self.key_path(key), value).map_err(|source| StoreError {
            key: key.to_string(),
            source,
        })
    }
}

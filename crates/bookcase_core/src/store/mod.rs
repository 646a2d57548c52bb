//! Blob store boundary.
//!
//! # Responsibility
//! - Define the injected key-value storage contract the gateway writes
//!   through.
//! - Provide in-memory and file-backed implementations.
//!
//! # Invariants
//! - The store holds opaque strings; serialization stays in the repo layer.
//! - `set` overwrites unconditionally; last writer wins.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Infrastructure failure while reading or writing one key.
#[derive(Debug)]
pub struct StoreError {
    pub key: String,
    pub source: std::io::Error,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "blob store failure for key `{}`: {}", self.key, self.source)
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// String-keyed blob storage contract.
///
/// Implementations are injected into the repository so tests can fake
/// persistence without touching the filesystem.
pub trait BlobStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

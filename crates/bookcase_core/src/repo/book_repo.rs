//! Book list gateway over a [`BlobStore`].
//!
//! # Responsibility
//! - Serialize the full book list as one JSON blob under a fixed key.
//! - Provide fetch-all, append, and remove-by-ISBN operations.
//!
//! # Invariants
//! - A missing key or an empty string reads back as an empty list.
//! - Malformed persisted JSON is rejected as [`RepoError::Corrupt`] instead
//!   of being masked as empty.
//! - `remove_by_isbn` removes every entry matching the key, so accidental
//!   ISBN collisions are cleaned up in one pass.

use crate::model::book::Book;
use crate::store::{BlobStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key holding the serialized book list.
pub const BOOKS_KEY: &str = "books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Gateway error for book persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// The persisted blob exists but is not a valid book list.
    Corrupt {
        key: &'static str,
        detail: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Corrupt { key, detail } => {
                write!(f, "corrupt book list under key `{key}`: {detail}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Corrupt { detail, .. } => Some(detail),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of a remove-by-ISBN pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The list was rewritten; `count` entries matched and were dropped.
    Removed { count: usize },
    /// The persisted list was already empty; nothing was written. This is a
    /// user-visible condition, not a failure.
    AlreadyEmpty,
}

/// Book list gateway bound to one blob store.
pub struct BookRepository<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> BookRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consumes the gateway, returning the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Reads the full persisted book list.
    ///
    /// # Contract
    /// - Missing key or empty string yields an empty list.
    ///
    /// # Errors
    /// - [`RepoError::Store`] on store I/O failure.
    /// - [`RepoError::Corrupt`] when a non-empty blob fails to parse.
    pub fn fetch_all(&self) -> RepoResult<Vec<Book>> {
        let blob = match self.store.get(BOOKS_KEY)? {
            None => return Ok(Vec::new()),
            Some(blob) if blob.is_empty() => return Ok(Vec::new()),
            Some(blob) => blob,
        };

        serde_json::from_str(&blob).map_err(|detail| RepoError::Corrupt {
            key: BOOKS_KEY,
            detail,
        })
    }

    /// Appends one book to the end of the persisted list.
    ///
    /// Fetch-modify-rewrite with no lock; concurrent writers race and the
    /// last one wins.
    pub fn append(&mut self, book: &Book) -> RepoResult<()> {
        let mut books = self.fetch_all()?;
        books.push(book.clone());
        self.write_all(&books)
    }

    /// Removes every entry whose isbn equals `isbn` and rewrites the blob.
    ///
    /// # Contract
    /// - An already-empty persisted list returns [`RemoveOutcome::AlreadyEmpty`]
    ///   without writing.
    /// - When no entry matches, the blob is still rewritten and
    ///   `Removed { count: 0 }` is returned.
    pub fn remove_by_isbn(&mut self, isbn: &str) -> RepoResult<RemoveOutcome> {
        let mut books = self.fetch_all()?;
        if books.is_empty() {
            return Ok(RemoveOutcome::AlreadyEmpty);
        }

        let before = books.len();
        books.retain(|book| book.isbn != isbn);
        let count = before - books.len();
        self.write_all(&books)?;
        Ok(RemoveOutcome::Removed { count })
    }

    fn write_all(&mut self, books: &[Book]) -> RepoResult<()> {
        let blob = serde_json::to_string(books).map_err(|detail| RepoError::Corrupt {
            key: BOOKS_KEY,
            detail,
        })?;
        self.store.set(BOOKS_KEY, &blob)?;
        Ok(())
    }
}

//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted to the blob store and rendered
//!   by the list view.
//! - Provide submit-time field validation.
//!
//! # Invariants
//! - `isbn` acts as the natural key for deletion; it is never validated for
//!   format or uniqueness.
//! - A `Book` is never mutated in place after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One book entry as stored and rendered.
///
/// The serialized shape is exactly three string fields, matching the
/// persisted wire format (a JSON array of these objects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Natural key used by delete-by-ISBN. Duplicates are permitted.
    pub isbn: String,
}

/// Submit-time validation failure: one of the three fields was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFieldError {
    /// Name of the first empty field, in title/author/isbn order.
    pub field: &'static str,
}

impl Display for EmptyFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "required field `{}` is empty", self.field)
    }
}

impl Error for EmptyFieldError {}

impl Book {
    /// Creates a book record from raw field values.
    ///
    /// No validation happens here; use [`Book::validated`] for the submit
    /// path where empty fields must be rejected.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Creates a book record, rejecting empty fields.
    ///
    /// # Errors
    /// - Returns [`EmptyFieldError`] naming the first empty field in
    ///   title/author/isbn order.
    pub fn validated(title: &str, author: &str, isbn: &str) -> Result<Self, EmptyFieldError> {
        if title.is_empty() {
            return Err(EmptyFieldError { field: "title" });
        }
        if author.is_empty() {
            return Err(EmptyFieldError { field: "author" });
        }
        if isbn.is_empty() {
            return Err(EmptyFieldError { field: "isbn" });
        }
        Ok(Self::new(title, author, isbn))
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, EmptyFieldError};

    #[test]
    fn validated_accepts_filled_fields() {
        let book = Book::validated("Dune", "Herbert", "9780441013593").unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.isbn, "9780441013593");
    }

    #[test]
    fn validated_names_first_empty_field() {
        let err = Book::validated("", "", "x").unwrap_err();
        assert_eq!(err, EmptyFieldError { field: "title" });

        let err = Book::validated("t", "", "").unwrap_err();
        assert_eq!(err, EmptyFieldError { field: "author" });

        let err = Book::validated("t", "a", "").unwrap_err();
        assert_eq!(err, EmptyFieldError { field: "isbn" });
    }

    #[test]
    fn whitespace_only_fields_pass_validation() {
        // Only the empty string is rejected, matching submit semantics.
        assert!(Book::validated(" ", "a", "i").is_ok());
    }
}

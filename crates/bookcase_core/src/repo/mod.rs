//! Persistence gateway over the blob store.
//!
//! # Responsibility
//! - Translate between the book list and its serialized blob form.
//! - Keep serialization details inside the persistence boundary.
//!
//! # Invariants
//! - Every write is a full fetch-modify-rewrite of the blob; there is no
//!   partial update.

pub mod book_repo;

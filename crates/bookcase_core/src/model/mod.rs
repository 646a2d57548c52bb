//! Domain model for the bookcase core.
//!
//! # Responsibility
//! - Define the canonical book record shared by persistence and view layers.
//!
//! # Invariants
//! - A `Book` is immutable once created; deletion happens by ISBN match.

pub mod book;

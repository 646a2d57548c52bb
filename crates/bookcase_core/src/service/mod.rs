//! Use-case coordination between form, gateway, and view.
//!
//! # Responsibility
//! - Drive the load/submit/delete flows so the view and the persisted list
//!   stay 1:1 after every completed action.
//!
//! # Invariants
//! - User-level conditions (empty field, cancelled delete, delete on empty
//!   store) surface as outcomes and notices, never as `Err`.

pub mod shelf_service;
